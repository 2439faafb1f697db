use macroquad::prelude::*;

/// Smallest on-screen tile size in pixels.
pub const MIN_TILE_SIZE: u32 = 16;
/// Largest on-screen tile size in pixels.
pub const MAX_TILE_SIZE: u32 = 64;
/// How many tiles of empty margin the camera may show past the zone edge.
pub const EDGE_MARGIN_TILES: u32 = 10;

/// Pan offset and zoom level of the map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Horizontal screen offset of the zone's left edge.
    pub x: f32,
    /// Vertical screen offset of the zone's top edge.
    pub y: f32,
    tile_size: u32,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            x: 0.0,
            y: 0.0,
            tile_size: MIN_TILE_SIZE,
        }
    }
}

impl Camera {
    /// On-screen size of one cell.
    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// `(x, y)` as a vector.
    pub fn offset(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    /// Move by `delta` pixels.
    pub fn pan(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// One pixel larger, up to [`MAX_TILE_SIZE`].
    pub fn zoom_in(&mut self) {
        if self.tile_size < MAX_TILE_SIZE {
            self.tile_size += 1;
        }
    }

    /// One pixel smaller, down to [`MIN_TILE_SIZE`].
    pub fn zoom_out(&mut self) {
        if self.tile_size > MIN_TILE_SIZE {
            self.tile_size -= 1;
        }
    }

    /// Keep the zone within (or near) the viewport. `zone_*` are in cells,
    /// `viewport_*` in pixels.
    pub fn clamp(&mut self, zone_width: usize, zone_height: usize, viewport_width: f32, viewport_height: f32) {
        self.x = clamp_axis(self.x, zone_width, viewport_width, self.tile_size);
        self.y = clamp_axis(self.y, zone_height, viewport_height, self.tile_size);
    }
}

fn clamp_axis(value: f32, cells: usize, viewport: f32, tile_size: u32) -> f32 {
    let ts = tile_size as f32;
    let upper = ts * EDGE_MARGIN_TILES as f32;
    let lower = -((cells as f32 * ts) + upper - viewport);
    // zone smaller than the viewport: pin to the upper bound
    value.clamp(lower.min(upper), upper)
}
