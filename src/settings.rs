use macroquad::prelude::*;

/// Default window size when no config overrides it.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
/// Default window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 700.0;
/// The layout never shrinks below this.
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
/// The layout never shrinks below this.
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;
/// Inset of the palette and widgets inside the options panel.
pub const MENU_PADDING: f32 = 20.0;
/// Palette grid is `PALETTE_COLUMNS` x `PALETTE_ROWS` cells.
pub const PALETTE_COLUMNS: u16 = 20;
/// See [`PALETTE_COLUMNS`].
pub const PALETTE_ROWS: u16 = 20;

const MIN_OPTIONS_WIDTH: f32 = 300.0;
// vertical room kept below the palette for the widget column
const WIDGET_COLUMN_RESERVE: f32 = 250.0;

/// Window, map viewport and options panel dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    window_width: f32,
    window_height: f32,
    screen_width: f32,
    options_width: f32,
}

impl Settings {
    /// Layout for a window of the given size.
    pub fn new(window_width: f32, window_height: f32) -> Self {
        let mut settings = Settings {
            window_width: 0.0,
            window_height: 0.0,
            screen_width: 0.0,
            options_width: 0.0,
        };
        settings.set_screen_sizes(window_width, window_height);
        settings
    }

    /// Recompute every derived value from a new window size.
    pub fn set_screen_sizes(&mut self, window_width: f32, window_height: f32) {
        self.window_width = window_width.max(MIN_WINDOW_WIDTH);
        self.window_height = window_height.max(MIN_WINDOW_HEIGHT);
        self.options_width = (self.window_width / 3.0)
            .floor()
            .min(self.window_height - WIDGET_COLUMN_RESERVE)
            .max(MIN_OPTIONS_WIDTH);
        self.screen_width = self.window_width - self.options_width;
    }

    /// Window width in pixels.
    #[inline]
    pub fn window_width(&self) -> f32 {
        self.window_width
    }

    /// Window height in pixels.
    #[inline]
    pub fn window_height(&self) -> f32 {
        self.window_height
    }

    /// Width of the map viewport, left of the options panel.
    #[inline]
    pub fn screen_width(&self) -> f32 {
        self.screen_width
    }

    /// Width of the options panel.
    #[inline]
    pub fn options_width(&self) -> f32 {
        self.options_width
    }

    /// Map area on screen.
    pub fn viewport_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.screen_width, self.window_height)
    }

    /// Options panel on screen.
    pub fn panel_rect(&self) -> Rect {
        Rect::new(self.screen_width, 0.0, self.options_width, self.window_height)
    }

    /// Square area the tile sheet is drawn into.
    pub fn palette_rect(&self) -> Rect {
        let side = self.options_width - MENU_PADDING * 2.0;
        Rect::new(self.screen_width + MENU_PADDING, MENU_PADDING, side, side)
    }

    /// Pixel size of one palette cell.
    pub fn tile_screen_size(&self) -> f32 {
        ((self.options_width - MENU_PADDING * 2.0) / PALETTE_COLUMNS as f32).floor()
    }

    /// Palette tile under `point`, scanning the 20 x 20 grid.
    pub fn palette_cell_at(&self, point: Vec2) -> Option<u16> {
        let size = self.tile_screen_size();
        let origin = vec2(self.screen_width + MENU_PADDING, MENU_PADDING);
        let local = point - origin;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let col = (local.x / size).floor() as u16;
        let row = (local.y / size).floor() as u16;
        if col >= PALETTE_COLUMNS || row >= PALETTE_ROWS {
            return None;
        }
        Some(col + row * PALETTE_COLUMNS)
    }

    /// Screen rect of palette tile `tile`.
    pub fn palette_cell_rect(&self, tile: u16) -> Rect {
        let size = self.tile_screen_size();
        Rect::new(
            (tile % PALETTE_COLUMNS) as f32 * size + self.screen_width + MENU_PADDING,
            (tile / PALETTE_COLUMNS) as f32 * size + MENU_PADDING,
            size,
            size,
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
    }
}
