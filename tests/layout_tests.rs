// tests/layout_tests.rs

use zone_editor::{Editor, EditorConfig, Settings, PALETTE_COLUMNS};

fn relative_x(settings: &Settings, x: f32) -> f32 {
    (x - settings.screen_width()) / settings.options_width()
}

#[test]
fn resize_scales_widgets_with_panel() {
    let mut editor = Editor::new(EditorConfig::default());
    let old = editor.settings;
    let before: Vec<_> = editor.menu.items().iter().map(|i| i.rect).collect();

    editor.resize(1600.0, 900.0);
    let new = editor.settings;
    assert_eq!(new.window_width(), 1600.0);
    assert!(new.options_width() > old.options_width());

    let palette = new.palette_rect();
    for (item, old_rect) in editor.menu.items().iter().zip(&before) {
        let r = item.rect;
        // inside the panel border
        assert!(r.x > new.screen_width());
        assert!(r.x + r.w < new.window_width());
        assert!(r.y >= palette.y + palette.h);
        assert!(r.y + r.h <= new.window_height());

        let scale = new.options_width() / old.options_width();
        assert!((relative_x(&new, r.x) - relative_x(&old, old_rect.x)).abs() < 1e-4);
        assert!((r.w - old_rect.w * scale).abs() < 1e-3);
        assert_eq!(r.h, old_rect.h);
    }
}

#[test]
fn resize_back_restores_original_rects() {
    let mut editor = Editor::new(EditorConfig::default());
    let before: Vec<_> = editor.menu.items().iter().map(|i| i.rect).collect();

    editor.resize(1600.0, 900.0);
    editor.resize(1200.0, 700.0);
    for (item, old) in editor.menu.items().iter().zip(&before) {
        assert!((item.rect.x - old.x).abs() < 1e-3);
        assert!((item.rect.y - old.y).abs() < 1e-3);
        assert!((item.rect.w - old.w).abs() < 1e-3);
    }
}

#[test]
fn palette_cells_follow_panel_width() {
    let mut editor = Editor::new(EditorConfig::default());
    let small = editor.settings.tile_screen_size();
    editor.resize(1600.0, 900.0);
    let large = editor.settings.tile_screen_size();
    assert!(large > small);
    assert!(large * PALETTE_COLUMNS as f32 <= editor.settings.palette_rect().w);
}
