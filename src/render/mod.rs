//! Drawing. Everything here needs a live Macroquad context.

mod cull;

pub use cull::{visible_cells, VisibleCells};

use crate::camera::Camera;
use crate::menu::{OptionItem, OptionKind, OptionMenu};
use crate::settings::Settings;
use crate::tileset::{source_rect, TileSheet};
use crate::zone::Zone;
use macroquad::prelude::*;

const PLACEHOLDER: Color = Color::new(0.0, 0.0, 0.0, 150.0 / 255.0);
const PANEL_BORDER: Color = Color::new(0.0, 0.0, 0.0, 120.0 / 255.0);
const HOVER_FILL: Color = Color::new(1.0, 1.0, 1.0, 120.0 / 255.0);
const WIDGET_FILL: Color = Color::new(0.0, 0.0, 0.0, 80.0 / 255.0);
const WIDGET_HOVER: Color = Color::new(1.0, 1.0, 1.0, 40.0 / 255.0);
const FONT_SIZE: f32 = 22.0;

/// Thin wrapper over Macroquad's rectangle and texture calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    /// Solid rectangle.
    pub fn fill_rect(&self, r: Rect, color: Color) {
        draw_rectangle(r.x, r.y, r.w, r.h, color);
    }

    /// One-pixel rectangle outline.
    pub fn outline_rect(&self, r: Rect, color: Color) {
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, color);
    }

    /// Grid cells that intersect the viewport. Empty cells get a translucent
    /// outline, the rest are blitted from the sheet.
    pub fn draw_zone(&self, zone: &Zone, sheet: Option<&TileSheet>, camera: &Camera, viewport: Rect) {
        let ts = camera.tile_size() as f32;
        let cells = visible_cells(camera, viewport, zone.width(), zone.height());
        let tiles = zone.tiles();

        for (x, y) in cells.iter() {
            let tile = &tiles[x + y * zone.width()];
            let dest = Rect::new(x as f32 * ts + camera.x, y as f32 * ts + camera.y, ts, ts);
            match sheet {
                Some(sheet) if !tile.is_empty() => {
                    draw_texture_ex(
                        &sheet.texture,
                        dest.x,
                        dest.y,
                        WHITE,
                        DrawTextureParams {
                            dest_size: Some(vec2(ts, ts)),
                            source: Some(source_rect(tile.tile_index)),
                            flip_x: tile.flip_h,
                            flip_y: tile.flip_v,
                            ..Default::default()
                        },
                    );
                }
                _ => self.outline_rect(dest, PLACEHOLDER),
            }
        }
    }

    /// Panel background and border.
    pub fn draw_panel(&self, settings: &Settings, background: Color) {
        let panel = settings.panel_rect();
        self.fill_rect(panel, background);
        self.outline_rect(panel, PANEL_BORDER);
    }

    /// Whole tile sheet scaled into the palette square.
    pub fn draw_palette(&self, settings: &Settings, sheet: Option<&TileSheet>) {
        let area = settings.palette_rect();
        self.outline_rect(area, PANEL_BORDER);
        if let Some(sheet) = sheet {
            draw_texture_ex(
                &sheet.texture,
                area.x,
                area.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(area.w, area.h)),
                    ..Default::default()
                },
            );
        }
    }

    /// Every visible widget.
    pub fn draw_menu(&self, menu: &OptionMenu) {
        for (i, item) in menu.items().iter().enumerate() {
            if menu.is_visible(i) {
                self.draw_item(item);
            }
        }
    }

    fn draw_item(&self, item: &OptionItem) {
        let r = item.rect;
        self.fill_rect(r, WIDGET_FILL);
        if item.hovered {
            self.fill_rect(r, WIDGET_HOVER);
        }
        self.outline_rect(r, if item.is_selected() { WHITE } else { PANEL_BORDER });

        let baseline = r.y + r.h / 2.0 + FONT_SIZE / 4.0;
        match item.kind {
            OptionKind::Button => {
                let dims = measure_text(&item.text, None, FONT_SIZE as u16, 1.0);
                draw_text(&item.text, r.x + (r.w - dims.width) / 2.0, baseline, FONT_SIZE, WHITE);
            }
            OptionKind::TextInput | OptionKind::NumberInput => {
                let caret = if item.is_selected() { "_" } else { "" };
                let line = format!("{} {}{}", item.label, item.text, caret);
                draw_text(&line, r.x + 8.0, baseline, FONT_SIZE, WHITE);
            }
        }
    }

    /// White outline on the active palette tile.
    pub fn draw_active_tile(&self, settings: &Settings, tile: u16) {
        self.outline_rect(settings.palette_cell_rect(tile), WHITE);
    }

    /// Translucent fill on the palette tile under the cursor.
    pub fn draw_palette_hover(&self, settings: &Settings, mouse: Vec2) {
        if let Some(tile) = settings.palette_cell_at(mouse) {
            self.fill_rect(settings.palette_cell_rect(tile), HOVER_FILL);
        }
    }
}
