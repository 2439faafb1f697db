#![warn(missing_docs)]

//! Tile-map zone editor for a 2D platformer, built on Macroquad.

mod app;
mod camera;
mod config;
mod editor;
mod error;
mod input;
mod loader {
    pub mod zone_file;
}
mod menu;
mod prompt;
mod render;
mod settings;
mod tile;
mod tileset;
mod zone;

pub use app::App;
pub use camera::{Camera, MAX_TILE_SIZE, MIN_TILE_SIZE};
pub use config::{DefaultZone, EditorConfig, CONFIG_FILE};
pub use editor::{CursorShape, Editor};
pub use error::EditorError;
pub use input::{InputState, TextEdit};
pub use loader::zone_file::{decode_zone, encode_zone, load_zone, save_zone, ZONE_EXTENSION};
pub use menu::{
    sanitize_act_number, OptionItem, OptionKind, OptionMenu, ACT_NO, LOAD_BUTTON, NEW_BUTTON, SAVE_BUTTON,
    ZONE_NAME,
};
pub use prompt::{NativePrompt, Prompt};
pub use render::{visible_cells, Renderer, VisibleCells};
pub use settings::{Settings, MENU_PADDING, PALETTE_COLUMNS, PALETTE_ROWS};
pub use tile::Tile;
pub use tileset::{apply_color_key, source_rect, TileSheet};
pub use zone::{Zone, MIN_ZONE_HEIGHT, MIN_ZONE_WIDTH};
