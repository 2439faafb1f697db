use crate::camera::Camera;
use crate::tile::Tile;
use macroquad::prelude::*;

/// Zones are never narrower than this many cells.
pub const MIN_ZONE_WIDTH: usize = 100;
/// Zones are never shorter than this many cells.
pub const MIN_ZONE_HEIGHT: usize = 64;

/// One act of a zone: metadata plus a `width * height` tile grid.
///
/// Cell `i` of the grid is `(i % width, i / width)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    /// Display name, e.g. "Emerald Hill".
    pub name: String,
    /// Act number, always at least 1.
    pub act: u32,
    /// Colour the viewport is cleared to.
    pub background: Color,
    /// Tile-sheet file name inside the asset directory.
    pub tile_set: String,
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Zone {
    /// Empty zone; dimensions below the minimum are raised to it.
    pub fn new(
        name: impl Into<String>,
        act: u32,
        background: Color,
        tile_set: impl Into<String>,
        width: usize,
        height: usize,
    ) -> Self {
        let width = width.max(MIN_ZONE_WIDTH);
        let height = height.max(MIN_ZONE_HEIGHT);
        Zone {
            name: name.into(),
            act: act.max(1),
            background,
            tile_set: tile_set.into(),
            width,
            height,
            tiles: vec![Tile::default(); width * height],
        }
    }

    /// Build from already decoded tiles. `tiles.len()` must equal
    /// `width * height`.
    pub(crate) fn from_tiles(
        name: String,
        act: u32,
        background: Color,
        tile_set: String,
        width: usize,
        tiles: Vec<Tile>,
    ) -> Self {
        debug_assert!(width > 0 && tiles.len() % width == 0);
        let height = tiles.len() / width;
        Zone {
            name,
            act,
            background,
            tile_set,
            width,
            height,
            tiles,
        }
    }

    /// Columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major tile slice.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x + y * self.width)
    }

    /// Cell at `(x, y)`, if inside the grid.
    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        self.index_of(x, y).map(|i| &self.tiles[i])
    }

    /// Paint a cell. Returns false when `(x, y)` is outside the grid.
    pub fn paint(&mut self, x: usize, y: usize, tile_index: u16, flip_h: bool, flip_v: bool) -> bool {
        match self.index_of(x, y) {
            Some(i) => {
                self.tiles[i].set(tile_index, flip_h, flip_v);
                true
            }
            None => false,
        }
    }

    /// Reset a cell to empty. Returns false when `(x, y)` is outside the grid.
    pub fn erase(&mut self, x: usize, y: usize) -> bool {
        match self.index_of(x, y) {
            Some(i) => {
                self.tiles[i].reset();
                true
            }
            None => false,
        }
    }

    /// Grid cell whose on-screen square contains `point`.
    pub fn cell_at(&self, point: Vec2, camera: &Camera) -> Option<(usize, usize)> {
        let ts = camera.tile_size() as f32;
        let local = (point - camera.offset()) / ts;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let (x, y) = (local.x.floor() as usize, local.y.floor() as usize);
        self.index_of(x, y).map(|_| (x, y))
    }

    /// Output file name: the initial of each word, the act number, `.zone`.
    /// Initials that are not alphanumeric are dropped, so the name never
    /// contains a path separator.
    pub fn file_name(&self) -> String {
        let initials: String = self
            .name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_uppercase)
            .collect();
        let stem = if initials.is_empty() { "ZONE".to_owned() } else { initials };
        format!("{}{}.zone", stem, self.act)
    }
}
