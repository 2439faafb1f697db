use macroquad::prelude::*;
use std::collections::HashSet;

/// Keyboard and mouse state for one logic tick.
///
/// `gather` is called every rendered frame. Held state is overwritten, while
/// presses, motion, wheel and text edits accumulate until [`InputState::consume`]
/// runs after the tick, so nothing pressed between ticks is lost.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    buttons_pressed: HashSet<MouseButton>,
    /// Cursor position in window pixels.
    pub mouse: Vec2,
    /// Cursor motion in pixels since the last tick.
    pub mouse_delta: Vec2,
    /// Accumulated vertical wheel movement since the last tick.
    pub wheel: f32,
    /// Typing and backspaces since the last tick, oldest first.
    pub text_edits: Vec<TextEdit>,
    last_mouse: Option<Vec2>,
}

/// One keystroke that changes a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    /// Printable character.
    Insert(char),
    /// Delete the last character.
    Backspace,
}

const BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

impl InputState {
    /// Sample Macroquad's input state for this frame.
    pub fn gather(&mut self) {
        self.keys_down = get_keys_down();

        self.buttons_down.clear();
        for button in BUTTONS {
            if is_mouse_button_down(button) {
                self.buttons_down.insert(button);
            }
            if is_mouse_button_pressed(button) {
                self.buttons_pressed.insert(button);
            }
        }

        let (x, y) = mouse_position();
        self.move_mouse(vec2(x, y));
        self.wheel += mouse_wheel().1;

        while let Some(c) = get_char_pressed() {
            self.type_char(c);
        }
        // chars and keys of the same frame cannot be ordered, keys go last
        for key in get_keys_pressed() {
            self.press_key(key);
        }
    }

    /// Forget the per-tick deltas once a tick has handled them.
    pub fn consume(&mut self) {
        self.keys_pressed.clear();
        self.buttons_pressed.clear();
        self.mouse_delta = Vec2::ZERO;
        self.wheel = 0.0;
        self.text_edits.clear();
    }

    /// Move the cursor, accumulating motion.
    pub fn move_mouse(&mut self, to: Vec2) {
        if let Some(last) = self.last_mouse {
            self.mouse_delta += to - last;
        }
        self.last_mouse = Some(to);
        self.mouse = to;
    }

    /// Mark a key as held.
    pub fn hold_key(&mut self, key: KeyCode) {
        self.keys_down.insert(key);
    }

    /// Register a key press edge (and hold the key). Backspace is also
    /// queued as a text edit.
    pub fn press_key(&mut self, key: KeyCode) {
        self.keys_down.insert(key);
        self.keys_pressed.insert(key);
        if key == KeyCode::Backspace {
            self.text_edits.push(TextEdit::Backspace);
        }
    }

    /// Mark a mouse button as held.
    pub fn hold_button(&mut self, button: MouseButton) {
        self.buttons_down.insert(button);
    }

    /// Register a mouse press edge (and hold the button).
    pub fn click(&mut self, button: MouseButton) {
        self.buttons_down.insert(button);
        self.buttons_pressed.insert(button);
    }

    /// Control characters are dropped; Enter and Backspace arrive as keys.
    pub fn type_char(&mut self, c: char) {
        if !c.is_control() {
            self.text_edits.push(TextEdit::Insert(c));
        }
    }

    /// [`InputState::type_char`] for every char of `text`.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.type_char(c);
        }
    }

    /// Key is held.
    #[inline]
    pub fn key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Key went down since the last tick.
    #[inline]
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Mouse button is held.
    #[inline]
    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Mouse button went down since the last tick.
    #[inline]
    pub fn button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Any of `keys` is held.
    pub fn any_key_down(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.key_down(*k))
    }

    /// Any of `keys` went down since the last tick.
    pub fn any_key_pressed(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.key_pressed(*k))
    }
}
