use crate::config::EditorConfig;
use crate::editor::{CursorShape, Editor};
use crate::input::InputState;
use crate::prompt::{NativePrompt, Prompt};
use crate::render::Renderer;
use crate::tileset::TileSheet;
use crate::zone::Zone;
use log::{debug, error, info};
use macroquad::miniquad::window::set_mouse_cursor;
use macroquad::miniquad::CursorIcon;
use macroquad::prelude::*;

/// The editor window: gathers input, ticks the [`Editor`] at a fixed rate
/// and draws every frame.
pub struct App {
    editor: Editor,
    sheet: Option<TileSheet>,
    input: InputState,
    prompt: NativePrompt,
    renderer: Renderer,
    cursor: CursorShape,
}

impl App {
    /// Must run inside the Macroquad main loop, the tile sheet becomes a
    /// texture.
    pub fn new(config: EditorConfig) -> Self {
        let editor = Editor::new(config);
        let mut prompt = NativePrompt;
        let sheet = load_sheet(&editor.config, editor.zone(), &mut prompt);
        App {
            editor,
            sheet,
            input: InputState::default(),
            prompt,
            renderer: Renderer,
            cursor: CursorShape::Arrow,
        }
    }

    /// Frame loop; returns only when the window closes.
    pub async fn run(mut self) {
        let interval = self.editor.config.tick_interval();
        let mut elapsed = 0.0;
        info!("editor running, logic at {} Hz", self.editor.config.logic_hz);

        loop {
            self.input.gather();
            elapsed += get_frame_time();
            if elapsed >= interval {
                elapsed = 0.0;
                self.tick();
            }
            self.draw();
            next_frame().await;
        }
    }

    fn tick(&mut self) {
        self.editor.resize(screen_width(), screen_height());

        let cursor = self.editor.update(&self.input, &mut self.prompt);
        self.input.consume();
        if cursor != self.cursor {
            set_mouse_cursor(match cursor {
                CursorShape::Arrow => CursorIcon::Default,
                CursorShape::Hand => CursorIcon::Pointer,
                CursorShape::Move => CursorIcon::Move,
            });
            self.cursor = cursor;
        }

        if let Some(zone) = self.editor.take_pending_zone() {
            let loaded = self.sheet.as_ref().map(|s| s.file_name.as_str());
            if sheet_is_loaded(loaded, &zone) {
                debug!("reusing tile sheet {}", zone.tile_set);
                self.editor.install_zone(zone);
            } else if let Some(sheet) = load_sheet(&self.editor.config, &zone, &mut self.prompt) {
                self.sheet = Some(sheet);
                self.editor.install_zone(zone);
            }
            // otherwise the current zone stays, its sheet could not be replaced
        }
    }

    fn draw(&self) {
        let editor = &self.editor;
        let settings = &editor.settings;
        let zone = editor.zone();
        let sheet = self.sheet.as_ref();

        clear_background(zone.background);
        self.renderer
            .draw_zone(zone, sheet, &editor.camera, settings.viewport_rect());
        self.renderer.draw_panel(settings, zone.background);
        self.renderer.draw_palette(settings, sheet);
        self.renderer.draw_menu(&editor.menu);
        self.renderer.draw_active_tile(settings, editor.active_tile);
        self.renderer.draw_palette_hover(settings, self.input.mouse);
    }
}

// the sheet a zone needs is already on the GPU
fn sheet_is_loaded(loaded: Option<&str>, zone: &Zone) -> bool {
    loaded == Some(zone.tile_set.as_str())
}

fn load_sheet(config: &EditorConfig, zone: &Zone, prompt: &mut dyn Prompt) -> Option<TileSheet> {
    match TileSheet::load(&config.asset_dir, &zone.tile_set, config.color_key) {
        Ok(sheet) => Some(sheet),
        Err(e) => {
            error!("{e}");
            prompt.report_error("Tile sheet", &e.to_string());
            None
        }
    }
}
