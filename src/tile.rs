// Bits of the 16-bit cell token stored in `.zone` files.
pub(crate) const FLIP_H: u16 = 0x8000; // bit 15
pub(crate) const FLIP_V: u16 = 0x4000; // bit 14
pub(crate) const OCCUPIED: u16 = 0x2000; // bit 13
pub(crate) const META_MASK: u16 = 0x1C00; // bits 10..=12
pub(crate) const META_SHIFT: u16 = 10;
pub(crate) const INDEX_MASK: u16 = 0x03FF; // bits 0..=9

/// One cell of a zone grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    /// Painted at least once since the last erase.
    pub occupied: bool,
    /// Mirrored left to right.
    pub flip_h: bool,
    /// Mirrored top to bottom.
    pub flip_v: bool,
    /// Free-form per-cell byte.
    pub metadata: u8,
    /// Index into the tile sheet; 0 draws as empty.
    pub tile_index: u16,
}

impl Tile {
    /// A freshly painted cell: occupied, metadata cleared.
    pub fn painted(tile_index: u16, flip_h: bool, flip_v: bool) -> Self {
        Tile {
            occupied: true,
            flip_h,
            flip_v,
            metadata: 0,
            tile_index,
        }
    }

    /// Overwrite this cell with a painted tile.
    pub fn set(&mut self, tile_index: u16, flip_h: bool, flip_v: bool) {
        *self = Tile::painted(tile_index, flip_h, flip_v);
    }

    /// Back to the empty default.
    pub fn reset(&mut self) {
        *self = Tile::default();
    }

    /// Drawn as a placeholder outline.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tile_index == 0
    }

    /// Pack into the on-disk token. Only the low three metadata bits and the
    /// low ten index bits survive.
    pub fn to_token(&self) -> u16 {
        let mut token = self.tile_index & INDEX_MASK;
        token |= ((self.metadata as u16) << META_SHIFT) & META_MASK;
        if self.occupied {
            token |= OCCUPIED;
        }
        if self.flip_h {
            token |= FLIP_H;
        }
        if self.flip_v {
            token |= FLIP_V;
        }
        token
    }

    /// Inverse of [`Tile::to_token`].
    pub fn from_token(token: u16) -> Self {
        Tile {
            occupied: token & OCCUPIED != 0,
            flip_h: token & FLIP_H != 0,
            flip_v: token & FLIP_V != 0,
            metadata: ((token & META_MASK) >> META_SHIFT) as u8,
            tile_index: token & INDEX_MASK,
        }
    }
}
