use crate::camera::Camera;
use crate::config::EditorConfig;
use crate::input::{InputState, TextEdit};
use crate::loader::zone_file::{load_zone, save_zone};
use crate::menu::{sanitize_act_number, OptionKind, OptionMenu, ACT_NO, LOAD_BUTTON, NEW_BUTTON, SAVE_BUTTON, ZONE_NAME};
use crate::prompt::Prompt;
use crate::settings::Settings;
use crate::zone::Zone;
use log::{debug, error, info, warn};
use macroquad::prelude::*;

const PAN_LEFT: [KeyCode; 2] = [KeyCode::A, KeyCode::Left];
const PAN_RIGHT: [KeyCode; 2] = [KeyCode::D, KeyCode::Right];
const PAN_UP: [KeyCode; 2] = [KeyCode::W, KeyCode::Up];
const PAN_DOWN: [KeyCode; 2] = [KeyCode::S, KeyCode::Down];
const ZOOM_IN: [KeyCode; 2] = [KeyCode::Equal, KeyCode::KpAdd];
const ZOOM_OUT: [KeyCode; 2] = [KeyCode::Minus, KeyCode::KpSubtract];
const CONFIRM: [KeyCode; 2] = [KeyCode::Enter, KeyCode::KpEnter];

/// Mouse cursor the window should show after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    /// Default pointer.
    #[default]
    Arrow,
    /// Over a widget or the palette.
    Hand,
    /// Resize-all, shown while middle-drag panning.
    Move,
}

/// Editor state and per-tick logic. Knows nothing about windows or GPUs:
/// the app feeds it an [`InputState`] and draws what it holds.
pub struct Editor {
    /// Loaded configuration.
    pub config: EditorConfig,
    /// Current layout.
    pub settings: Settings,
    /// Map view.
    pub camera: Camera,
    /// Options panel widgets.
    pub menu: OptionMenu,
    zone: Zone,
    /// Palette tile that left clicks paint.
    pub active_tile: u16,
    pending_zone: Option<Zone>,
}

impl Editor {
    /// Editor showing the configured default zone.
    pub fn new(config: EditorConfig) -> Self {
        let settings = Settings::new(config.window_width, config.window_height);
        let zone = config.default_zone();
        let menu = OptionMenu::standard(&settings, &zone);
        Editor {
            config,
            settings,
            camera: Camera::default(),
            menu,
            zone,
            active_tile: 0,
            pending_zone: None,
        }
    }

    /// The zone being edited.
    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// A zone staged by New or Load, waiting for its tile sheet.
    pub fn take_pending_zone(&mut self) -> Option<Zone> {
        self.pending_zone.take()
    }

    /// Make `zone` current, replacing the old one wholesale.
    pub fn install_zone(&mut self, zone: Zone) {
        info!("switching to zone '{}' act {}", zone.name, zone.act);
        self.menu.set_text(ZONE_NAME, zone.name.clone());
        self.menu.set_text(ACT_NO, zone.act.to_string());
        self.zone = zone;
    }

    /// Window size changed.
    pub fn resize(&mut self, window_width: f32, window_height: f32) {
        let old = self.settings;
        self.settings.set_screen_sizes(window_width, window_height);
        if old == self.settings {
            return;
        }
        debug!(
            "resized to {}x{}, panel {}",
            self.settings.window_width(),
            self.settings.window_height(),
            self.settings.options_width()
        );
        self.menu.relayout(&old, &self.settings);
    }

    /// One logic tick.
    pub fn update(&mut self, input: &InputState, prompt: &mut dyn Prompt) -> CursorShape {
        let mut cursor = CursorShape::Arrow;
        if self.menu.update_hover(input.mouse) {
            cursor = CursorShape::Hand;
        }

        match self.menu.selected_item().map(|item| item.kind) {
            None => self.keyboard_camera(input),
            Some(OptionKind::TextInput) | Some(OptionKind::NumberInput) => self.edit_field(input),
            Some(OptionKind::Button) => {
                self.press_button(prompt);
                self.menu.clear_selection();
            }
        }

        if input.button_pressed(MouseButton::Left) {
            self.left_click(input);
        }
        if input.button_pressed(MouseButton::Right) && self.over_map(input.mouse) {
            if let Some((x, y)) = self.zone.cell_at(input.mouse, &self.camera) {
                self.zone.erase(x, y);
            }
        }
        if input.button_down(MouseButton::Middle) && self.inside_viewport(input.mouse) {
            cursor = CursorShape::Move;
            let ts = self.camera.tile_size() as f32;
            self.camera.pan(input.mouse_delta * ts * 2.0);
        }

        if self.settings.palette_cell_at(input.mouse).is_some() {
            cursor = CursorShape::Hand;
        }

        self.camera.clamp(
            self.zone.width(),
            self.zone.height(),
            self.settings.screen_width(),
            self.settings.window_height(),
        );
        cursor
    }

    fn keyboard_camera(&mut self, input: &InputState) {
        let ts = self.camera.tile_size() as f32;
        let mut delta = Vec2::ZERO;
        if input.any_key_down(&PAN_LEFT) {
            delta.x += ts;
        }
        if input.any_key_down(&PAN_RIGHT) {
            delta.x -= ts;
        }
        if input.any_key_down(&PAN_UP) {
            delta.y += ts;
        }
        if input.any_key_down(&PAN_DOWN) {
            delta.y -= ts;
        }
        self.camera.pan(delta);

        if input.any_key_down(&ZOOM_IN) || input.wheel > 0.0 {
            self.camera.zoom_in();
        }
        if input.any_key_down(&ZOOM_OUT) || input.wheel < 0.0 {
            self.camera.zoom_out();
        }
    }

    fn edit_field(&mut self, input: &InputState) {
        if let Some(item) = self.menu.selected_item_mut() {
            for edit in &input.text_edits {
                match *edit {
                    TextEdit::Insert(c) => item.type_char(c),
                    TextEdit::Backspace => item.backspace(),
                }
            }
        }
        if input.any_key_pressed(&CONFIRM) {
            self.commit_selected(true);
        } else if input.key_pressed(KeyCode::Escape) {
            self.commit_selected(false);
        }
    }

    /// Write the selected field into the zone (`save`) or reload it from the
    /// zone, then deselect.
    fn commit_selected(&mut self, save: bool) {
        let Some(index) = self.menu.clear_selection() else {
            return;
        };
        let Some((name, text)) = self.menu.item(index).map(|i| (i.name.clone(), i.text.clone())) else {
            return;
        };
        match name.as_str() {
            ZONE_NAME if save => self.zone.name = text,
            ZONE_NAME => {
                let name = self.zone.name.clone();
                self.menu.set_text(ZONE_NAME, name);
            }
            ACT_NO if save => {
                let (text, act) = sanitize_act_number(&text);
                self.zone.act = act;
                self.menu.set_text(ACT_NO, text);
            }
            ACT_NO => {
                let act = self.zone.act.to_string();
                self.menu.set_text(ACT_NO, act);
            }
            _ => {}
        }
    }

    fn press_button(&mut self, prompt: &mut dyn Prompt) {
        let Some(name) = self.menu.selected_item().map(|item| item.name.clone()) else {
            return;
        };
        match name.as_str() {
            NEW_BUTTON => {
                if prompt.confirm("Confirm", "Are you sure?") {
                    self.pending_zone = Some(self.config.default_zone());
                }
            }
            SAVE_BUTTON => {
                if let Err(e) = save_zone(&self.zone, &self.config.zone_dir) {
                    error!("{e}");
                    prompt.report_error("Save failed", &e.to_string());
                }
            }
            LOAD_BUTTON => {
                let Some(path) = prompt.pick_zone_file(&self.config.zone_dir) else {
                    debug!("open dialog cancelled");
                    return;
                };
                match load_zone(&path, self.config.background()) {
                    Ok(zone) => self.pending_zone = Some(zone),
                    Err(e) => {
                        error!("{e}");
                        prompt.report_error("Load failed", &e.to_string());
                    }
                }
            }
            other => warn!("no action bound to button '{}'", other),
        }
    }

    fn left_click(&mut self, input: &InputState) {
        match self.menu.first_hovered() {
            Some(index) if self.menu.selected() == Some(index) => {}
            Some(index) => {
                self.commit_selected(true);
                self.menu.select(index);
            }
            None => self.commit_selected(true),
        }

        if let Some(tile) = self.settings.palette_cell_at(input.mouse) {
            self.active_tile = tile;
        }

        if self.over_map(input.mouse) {
            if let Some((x, y)) = self.zone.cell_at(input.mouse, &self.camera) {
                let flip_h = input.key_down(KeyCode::LeftShift);
                let flip_v = input.key_down(KeyCode::LeftControl);
                self.zone.paint(x, y, self.active_tile, flip_h, flip_v);
            }
        }
    }

    #[inline]
    fn over_map(&self, p: Vec2) -> bool {
        p.x < self.settings.screen_width()
    }

    #[inline]
    fn inside_viewport(&self, p: Vec2) -> bool {
        p.x > 0.0 && p.x < self.settings.screen_width() && p.y > 0.0 && p.y < self.settings.window_height()
    }
}
