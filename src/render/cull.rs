use crate::camera::Camera;
use macroquad::prelude::*;
use std::ops::Range;

const CULL_MARGIN_CELLS: i64 = 1;

/// Columns and rows of the grid that can appear inside `view`.
pub struct VisibleCells {
    /// Visible columns.
    pub cols: Range<usize>,
    /// Visible rows.
    pub rows: Range<usize>,
}

impl VisibleCells {
    /// Nothing of the grid is on screen.
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty() || self.rows.is_empty()
    }

    /// Row-major `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.clone().flat_map(move |y| self.cols.clone().map(move |x| (x, y)))
    }
}

/// Cells of a `width` x `height` grid overlapping the screen-space `view`
/// rect, padded by one cell.
pub fn visible_cells(camera: &Camera, view: Rect, width: usize, height: usize) -> VisibleCells {
    let ts = camera.tile_size() as f32;
    let min = (vec2(view.x, view.y) - camera.offset()) / ts;
    let max = (vec2(view.x + view.w, view.y + view.h) - camera.offset()) / ts;

    VisibleCells {
        cols: axis(min.x, max.x, width),
        rows: axis(min.y, max.y, height),
    }
}

fn axis(min: f32, max: f32, len: usize) -> Range<usize> {
    let (mut lo, mut hi) = (min.floor() as i64, max.ceil() as i64);
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }
    lo -= CULL_MARGIN_CELLS;
    hi += CULL_MARGIN_CELLS;
    let lo = lo.clamp(0, len as i64) as usize;
    let hi = hi.clamp(0, len as i64) as usize;
    lo..hi
}
