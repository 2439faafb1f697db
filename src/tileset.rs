use crate::error::EditorError;
use log::debug;
use macroquad::prelude::*;
use std::path::Path;

/// Source tiles are square, this many pixels on a side.
pub const SHEET_TILE_PX: f32 = 16.0;
/// Tiles per row in a tile sheet.
pub const SHEET_COLUMNS: u16 = 20;

/// A tile sheet uploaded to the GPU.
pub struct TileSheet {
    /// Nearest-filtered texture, colour key already applied.
    pub texture: Texture2D,
    /// File name relative to the asset directory.
    pub file_name: String,
}

impl TileSheet {
    /// Decode `asset_dir/file_name`, key out `color_key`, upload.
    pub fn load(asset_dir: &Path, file_name: &str, color_key: [u8; 3]) -> Result<Self, EditorError> {
        let path = asset_dir.join(file_name);
        let bytes = std::fs::read(&path).map_err(|e| EditorError::AssetLoad {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let mut image = Image::from_file_with_format(&bytes, None).map_err(|e| {
            EditorError::AssetLoad {
                path: path.clone(),
                reason: e.to_string(),
            }
        })?;
        let keyed = apply_color_key(&mut image, color_key);
        debug!(
            "tile sheet {} is {}x{}, {} keyed pixels",
            path.display(),
            image.width,
            image.height,
            keyed
        );

        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        Ok(TileSheet {
            texture,
            file_name: file_name.to_owned(),
        })
    }
}

/// Make every pixel whose RGB equals `key` fully transparent. Returns the
/// number of pixels changed.
pub fn apply_color_key(image: &mut Image, key: [u8; 3]) -> usize {
    let mut keyed = 0;
    for px in image.bytes.chunks_exact_mut(4) {
        if px[..3] == key {
            px[3] = 0;
            keyed += 1;
        }
    }
    keyed
}

/// Source rect of `tile_index` inside the sheet.
pub fn source_rect(tile_index: u16) -> Rect {
    Rect::new(
        (tile_index % SHEET_COLUMNS) as f32 * SHEET_TILE_PX,
        (tile_index / SHEET_COLUMNS) as f32 * SHEET_TILE_PX,
        SHEET_TILE_PX,
        SHEET_TILE_PX,
    )
}
