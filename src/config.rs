use crate::settings::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::zone::{Zone, MIN_ZONE_HEIGHT, MIN_ZONE_WIDTH};
use anyhow::Context;
use macroquad::prelude::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "zone_editor.json";

/// User-editable editor configuration. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Directory holding tile-sheet PNGs.
    pub asset_dir: PathBuf,
    /// Directory zones are saved into.
    pub zone_dir: PathBuf,
    /// Initial window width.
    pub window_width: f32,
    /// Initial window height.
    pub window_height: f32,
    /// RGB made transparent when a tile sheet is loaded.
    pub color_key: [u8; 3],
    /// Logic ticks per second.
    pub logic_hz: f32,
    /// What "New" creates.
    pub default_zone: DefaultZone,
}

/// Description of the zone created on startup and by "New".
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefaultZone {
    /// Zone name.
    pub name: String,
    /// Act number.
    pub act: u32,
    /// RGBA clear colour.
    pub background: [u8; 4],
    /// Tile-sheet file name inside `asset_dir`.
    pub tile_set: String,
    /// Columns, floored to the zone minimum.
    pub width: usize,
    /// Rows, floored to the zone minimum.
    pub height: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            asset_dir: PathBuf::from("assets/zone_tilesets"),
            zone_dir: PathBuf::from("zones"),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            color_key: [255, 0, 255],
            logic_hz: 20.0,
            default_zone: DefaultZone::default(),
        }
    }
}

impl Default for DefaultZone {
    fn default() -> Self {
        DefaultZone {
            name: "Zone Name".to_owned(),
            act: 1,
            background: [23, 27, 33, 255],
            tile_set: "Emerald_Hill.png".to_owned(),
            width: MIN_ZONE_WIDTH,
            height: MIN_ZONE_HEIGHT,
        }
    }
}

impl EditorConfig {
    /// Parse a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let txt = std::fs::read_to_string(path).with_context(|| format!("Reading config file {}", path.display()))?;
        let cfg: EditorConfig =
            serde_json::from_str(&txt).with_context(|| format!("Parsing config file {}", path.display()))?;
        if !(cfg.logic_hz > 0.0) {
            anyhow::bail!("logic_hz must be positive in {}", path.display());
        }
        Ok(cfg)
    }

    /// Seconds between logic ticks.
    pub fn tick_interval(&self) -> f32 {
        1.0 / self.logic_hz
    }

    /// Background of new and opened zones.
    pub fn background(&self) -> Color {
        let [r, g, b, a] = self.default_zone.background;
        Color::from_rgba(r, g, b, a)
    }

    /// A fresh zone as described by `default_zone`.
    pub fn default_zone(&self) -> Zone {
        let d = &self.default_zone;
        Zone::new(d.name.clone(), d.act, self.background(), d.tile_set.clone(), d.width, d.height)
    }
}
