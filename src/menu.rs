//! Options panel widgets.
//!
//! The panel holds an ordered list of [`OptionItem`]s and owns the selection:
//! at most one item is selected at any time, and selecting one deselects the
//! rest.

use crate::settings::{Settings, MENU_PADDING};
use crate::zone::Zone;
use macroquad::prelude::*;

/// Stable widget names used for dispatch.
pub const ZONE_NAME: &str = "ZoneName";
/// Act number field.
pub const ACT_NO: &str = "ActNo";
/// Save button.
pub const SAVE_BUTTON: &str = "SaveButton";
/// Load button.
pub const LOAD_BUTTON: &str = "LoadButton";
/// New button.
pub const NEW_BUTTON: &str = "NewButton";

/// Widget height in pixels.
pub const ITEM_HEIGHT: f32 = 36.0;
/// Vertical gap between widgets.
pub const ITEM_SPACING: f32 = 10.0;
/// Number fields hold at most this many digits.
pub const MAX_NUMBER_DIGITS: usize = 5;

/// What a widget does with input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Free text field.
    TextInput,
    /// Digits-only field.
    NumberInput,
    /// Fires once when selected.
    Button,
}

/// One widget in the options panel.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionItem {
    /// Input behaviour.
    pub kind: OptionKind,
    /// Stable key, see the name constants in this module.
    pub name: String,
    /// Caption drawn before the text of a field.
    pub label: String,
    /// Editable buffer, or the caption of a button.
    pub text: String,
    /// Screen rect.
    pub rect: Rect,
    /// Cursor is over the rect.
    pub hovered: bool,
    selected: bool,
    /// Not drawn or hoverable while a text field is being edited.
    pub hide_while_editing: bool,
}

impl OptionItem {
    /// This item holds the panel's selection.
    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Text or number input.
    #[inline]
    pub fn is_field(&self) -> bool {
        matches!(self.kind, OptionKind::TextInput | OptionKind::NumberInput)
    }

    /// Rect for the widget in `slot` under the given layout.
    pub fn slot_rect(settings: &Settings, slot: usize) -> Rect {
        Rect::new(
            settings.screen_width() + MENU_PADDING,
            settings.options_width() + slot as f32 * (ITEM_HEIGHT + ITEM_SPACING),
            settings.options_width() - MENU_PADDING * 2.0,
            ITEM_HEIGHT,
        )
    }

    /// Move the rect from the `old` layout to the `new` one. Horizontal
    /// position and width scale with the panel width; the offset below the
    /// palette is kept.
    pub fn update_position(&mut self, old: &Settings, new: &Settings) {
        let scale = new.options_width() / old.options_width();
        self.rect.x = new.screen_width() + (self.rect.x - old.screen_width()) * scale;
        self.rect.w *= scale;
        self.rect.y = new.options_width() + (self.rect.y - old.options_width());
    }

    /// Append one typed character. Number fields keep digits only.
    pub fn type_char(&mut self, c: char) {
        match self.kind {
            OptionKind::TextInput => self.text.push(c),
            OptionKind::NumberInput if c.is_ascii_digit() && self.text.len() < MAX_NUMBER_DIGITS => {
                self.text.push(c)
            }
            OptionKind::NumberInput | OptionKind::Button => {}
        }
    }

    /// Append typed characters, see [`OptionItem::type_char`].
    pub fn type_text(&mut self, typed: &str) {
        for c in typed.chars() {
            self.type_char(c);
        }
    }

    /// Drop the last character of a field.
    pub fn backspace(&mut self) {
        if self.is_field() {
            self.text.pop();
        }
    }
}

/// Strip leading zeros; empty or zero becomes 1.
pub fn sanitize_act_number(text: &str) -> (String, u32) {
    let trimmed = text.trim().trim_start_matches('0');
    match trimmed.parse::<u32>() {
        Ok(n) if n > 0 => (n.to_string(), n),
        _ => ("1".to_owned(), 1),
    }
}

/// The widget column of the options panel.
#[derive(Debug, Clone, Default)]
pub struct OptionMenu {
    items: Vec<OptionItem>,
    selected: Option<usize>,
}

impl OptionMenu {
    /// Zone name, act number, Save, Load and New, bound to `zone`.
    pub fn standard(settings: &Settings, zone: &Zone) -> Self {
        let mut menu = OptionMenu::default();
        menu.add_item(settings, OptionKind::TextInput, ZONE_NAME, &zone.name, "Zone Name:", false);
        menu.add_item(settings, OptionKind::NumberInput, ACT_NO, &zone.act.to_string(), "Act Number:", false);
        menu.add_item(settings, OptionKind::Button, SAVE_BUTTON, "Save", "", false);
        menu.add_item(settings, OptionKind::Button, LOAD_BUTTON, "Load", "", true);
        menu.add_item(settings, OptionKind::Button, NEW_BUTTON, "New", "", true);
        menu
    }

    /// Register a widget in the next free slot.
    pub fn add_item(
        &mut self,
        settings: &Settings,
        kind: OptionKind,
        name: &str,
        text: &str,
        label: &str,
        hide_while_editing: bool,
    ) -> usize {
        let slot = self.items.len();
        self.items.push(OptionItem {
            kind,
            name: name.to_owned(),
            label: label.to_owned(),
            text: text.to_owned(),
            rect: OptionItem::slot_rect(settings, slot),
            hovered: false,
            selected: false,
            hide_while_editing,
        });
        slot
    }

    /// Widgets in slot order.
    pub fn items(&self) -> &[OptionItem] {
        &self.items
    }

    /// Widget at `index`.
    pub fn item(&self, index: usize) -> Option<&OptionItem> {
        self.items.get(index)
    }

    /// Index of the widget with the stable `name`.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.name == name)
    }

    /// Set the buffer of the named widget.
    pub fn set_text(&mut self, name: &str, text: impl Into<String>) {
        if let Some(i) = self.find(name) {
            self.items[i].text = text.into();
        }
    }

    /// A text or number field is currently selected.
    pub fn is_editing(&self) -> bool {
        self.selected_item().map_or(false, OptionItem::is_field)
    }

    /// Drawn and hoverable right now.
    pub fn is_visible(&self, index: usize) -> bool {
        self.items
            .get(index)
            .map_or(false, |item| !(item.hide_while_editing && self.is_editing()))
    }

    /// Refresh `hovered` flags. Returns true when any widget is hovered.
    pub fn update_hover(&mut self, point: Vec2) -> bool {
        let editing = self.is_editing();
        let mut any = false;
        for item in &mut self.items {
            let visible = !(item.hide_while_editing && editing);
            item.hovered = visible && contains_inclusive(&item.rect, point);
            any |= item.hovered;
        }
        any
    }

    /// First hovered widget in slot order.
    pub fn first_hovered(&self) -> Option<usize> {
        self.items.iter().position(|i| i.hovered)
    }

    /// Index of the selected widget.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected widget.
    pub fn selected_item(&self) -> Option<&OptionItem> {
        self.selected.map(|i| &self.items[i])
    }

    /// The selected widget, mutably.
    pub fn selected_item_mut(&mut self) -> Option<&mut OptionItem> {
        let i = self.selected?;
        self.items.get_mut(i)
    }

    /// Select `index`, deselecting whatever was selected before.
    pub fn select(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.clear_selection();
        self.items[index].selected = true;
        self.selected = Some(index);
    }

    /// Deselect and return the previously selected index.
    pub fn clear_selection(&mut self) -> Option<usize> {
        let prev = self.selected.take();
        if let Some(i) = prev {
            self.items[i].selected = false;
        }
        prev
    }

    /// Move every widget rect from the `old` layout to the `new` one.
    pub fn relayout(&mut self, old: &Settings, new: &Settings) {
        for item in &mut self.items {
            item.update_position(old, new);
        }
    }
}

// edges count as inside
fn contains_inclusive(rect: &Rect, p: Vec2) -> bool {
    p.x >= rect.x && p.x <= rect.x + rect.w && p.y >= rect.y && p.y <= rect.y + rect.h
}
