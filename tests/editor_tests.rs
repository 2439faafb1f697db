// tests/editor_tests.rs

use macroquad::prelude::*;
use std::path::{Path, PathBuf};
use zone_editor::{
    save_zone, CursorShape, Editor, EditorConfig, InputState, Prompt, Tile, Zone, ACT_NO, LOAD_BUTTON,
    MAX_TILE_SIZE, MIN_TILE_SIZE, NEW_BUTTON, SAVE_BUTTON, ZONE_NAME,
};

#[derive(Default)]
struct ScriptedPrompt {
    confirm_answer: bool,
    pick: Option<PathBuf>,
    confirms: usize,
    errors: Vec<String>,
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, _title: &str, _text: &str) -> bool {
        self.confirms += 1;
        self.confirm_answer
    }

    fn pick_zone_file(&mut self, _start_dir: &Path) -> Option<PathBuf> {
        self.pick.take()
    }

    fn report_error(&mut self, _title: &str, text: &str) {
        self.errors.push(text.to_owned());
    }
}

fn editor_in(dir: &Path) -> Editor {
    let config = EditorConfig {
        zone_dir: dir.to_path_buf(),
        ..EditorConfig::default()
    };
    Editor::new(config)
}

fn item_center(editor: &Editor, name: &str) -> Vec2 {
    let i = editor.menu.find(name).expect("widget");
    let r = editor.menu.items()[i].rect;
    vec2(r.x + r.w / 2.0, r.y + r.h / 2.0)
}

fn tick(editor: &mut Editor, prompt: &mut ScriptedPrompt, f: impl FnOnce(&mut InputState)) -> CursorShape {
    let mut input = InputState::default();
    f(&mut input);
    editor.update(&input, prompt)
}

fn click_widget(editor: &mut Editor, prompt: &mut ScriptedPrompt, name: &str) {
    let at = item_center(editor, name);
    tick(editor, prompt, |i| {
        i.move_mouse(at);
        i.click(MouseButton::Left);
    });
}

#[test]
fn paint_with_shift_then_erase() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut editor = editor_in(dir.path());
    let mut prompt = ScriptedPrompt::default();
    editor.active_tile = 12;

    tick(&mut editor, &mut prompt, |i| {
        i.move_mouse(vec2(83.0, 83.0));
        i.hold_key(KeyCode::LeftShift);
        i.click(MouseButton::Left);
    });
    assert_eq!(
        editor.zone().tile(5, 5),
        Some(&Tile {
            occupied: true,
            flip_h: true,
            flip_v: false,
            metadata: 0,
            tile_index: 12,
        })
    );
    assert_eq!(editor.zone().tiles().iter().filter(|t| t.occupied).count(), 1);

    tick(&mut editor, &mut prompt, |i| {
        i.move_mouse(vec2(83.0, 83.0));
        i.click(MouseButton::Right);
    });
    assert_eq!(editor.zone().tile(5, 5), Some(&Tile::default()));
}

#[test]
fn holding_left_button_does_not_repaint() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut editor = editor_in(dir.path());
    let mut prompt = ScriptedPrompt::default();
    editor.active_tile = 3;

    tick(&mut editor, &mut prompt, |i| {
        i.move_mouse(vec2(40.0, 40.0));
        i.hold_button(MouseButton::Left);
    });
    assert!(editor.zone().tiles().iter().all(|t| !t.occupied));
}

#[test]
fn palette_click_sets_active_tile() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut editor = editor_in(dir.path());
    let mut prompt = ScriptedPrompt::default();

    let cell = editor.settings.palette_cell_rect(213);
    let cursor = tick(&mut editor, &mut prompt, |i| {
        i.move_mouse(vec2(cell.x + 2.0, cell.y + 2.0));
        i.click(MouseButton::Left);
    });
    assert_eq!(editor.active_tile, 213);
    assert_eq!(cursor, CursorShape::Hand);
    // clicks in the panel never paint
    assert!(editor.zone().tiles().iter().all(|t| !t.occupied));
}

#[test]
fn keys_pan_and_zoom_only_without_selection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut editor = editor_in(dir.path());
    let mut prompt = ScriptedPrompt::default();

    tick(&mut editor, &mut prompt, |i| i.hold_key(KeyCode::D));
    assert_eq!(editor.camera.x, -16.0);
    tick(&mut editor, &mut prompt, |i| i.hold_key(KeyCode::Down));
    assert_eq!(editor.camera.y, -16.0);

    for _ in 0..100 {
        tick(&mut editor, &mut prompt, |i| {
            i.hold_key(KeyCode::Equal);
            i.wheel = 1.0;
        });
    }
    assert_eq!(editor.camera.tile_size(), MAX_TILE_SIZE);
    for _ in 0..100 {
        tick(&mut editor, &mut prompt, |i| i.hold_key(KeyCode::Minus));
    }
    assert_eq!(editor.camera.tile_size(), MIN_TILE_SIZE);

    click_widget(&mut editor, &mut prompt, ZONE_NAME);
    let before = editor.camera;
    tick(&mut editor, &mut prompt, |i| i.hold_key(KeyCode::A));
    assert_eq!(editor.camera, before);
}

#[test]
fn camera_never_leaves_bounds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut editor = editor_in(dir.path());
    let mut prompt = ScriptedPrompt::default();

    for _ in 0..50 {
        tick(&mut editor, &mut prompt, |i| {
            i.hold_key(KeyCode::Left);
            i.hold_key(KeyCode::Up);
        });
    }
    let ts = editor.camera.tile_size() as f32;
    assert_eq!(editor.camera.x, ts * 10.0);
    assert_eq!(editor.camera.y, ts * 10.0);

    for _ in 0..500 {
        tick(&mut editor, &mut prompt, |i| {
            i.hold_key(KeyCode::Right);
            i.hold_key(KeyCode::Down);
        });
    }
    let zone = editor.zone();
    let min_x = -((zone.width() as f32 * ts) + ts * 10.0 - editor.settings.screen_width());
    let min_y = -((zone.height() as f32 * ts) + ts * 10.0 - editor.settings.window_height());
    assert_eq!(editor.camera.x, min_x);
    assert_eq!(editor.camera.y, min_y);
}

#[test]
fn middle_drag_pans_by_scaled_motion() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut editor = editor_in(dir.path());
    let mut prompt = ScriptedPrompt::default();

    let cursor = tick(&mut editor, &mut prompt, |i| {
        i.move_mouse(vec2(400.0, 300.0));
        i.move_mouse(vec2(398.0, 299.0));
        i.hold_button(MouseButton::Middle);
    });
    assert_eq!(cursor, CursorShape::Move);
    assert_eq!(editor.camera.x, -2.0 * 16.0 * 2.0);
    assert_eq!(editor.camera.y, -1.0 * 16.0 * 2.0);
}

#[test]
fn enter_commits_name_and_sanitized_act() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut editor = editor_in(dir.path());
    let mut prompt = ScriptedPrompt::default();

    click_widget(&mut editor, &mut prompt, ZONE_NAME);
    assert!(editor.menu.is_editing());
    tick(&mut editor, &mut prompt, |i| i.type_text("!"));
    tick(&mut editor, &mut prompt, |i| i.press_key(KeyCode::Enter));
    assert_eq!(editor.zone().name, "Zone Name!");
    assert_eq!(editor.menu.selected(), None);

    click_widget(&mut editor, &mut prompt, ACT_NO);
    tick(&mut editor, &mut prompt, |i| i.press_key(KeyCode::Backspace));
    tick(&mut editor, &mut prompt, |i| i.type_text("007"));
    tick(&mut editor, &mut prompt, |i| i.press_key(KeyCode::Enter));
    assert_eq!(editor.zone().act, 7);
    let act = editor.menu.find(ACT_NO).expect("act");
    assert_eq!(editor.menu.items()[act].text, "7");

    click_widget(&mut editor, &mut prompt, ACT_NO);
    tick(&mut editor, &mut prompt, |i| i.press_key(KeyCode::Backspace));
    tick(&mut editor, &mut prompt, |i| i.type_text("0"));
    tick(&mut editor, &mut prompt, |i| i.press_key(KeyCode::KpEnter));
    assert_eq!(editor.zone().act, 1);
}

#[test]
fn edits_within_one_tick_apply_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut editor = editor_in(dir.path());
    let mut prompt = ScriptedPrompt::default();

    click_widget(&mut editor, &mut prompt, ZONE_NAME);
    tick(&mut editor, &mut prompt, |i| {
        i.type_text("ab");
        i.press_key(KeyCode::Backspace);
        i.press_key(KeyCode::Backspace);
        i.type_text("c");
    });
    let name = editor.menu.find(ZONE_NAME).expect("name");
    assert_eq!(editor.menu.items()[name].text, "Zone Namec");

    tick(&mut editor, &mut prompt, |i| {
        i.press_key(KeyCode::Backspace);
        i.press_key(KeyCode::Backspace);
    });
    assert_eq!(editor.menu.items()[name].text, "Zone Nam");
}

#[test]
fn escape_reverts_buffer() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut editor = editor_in(dir.path());
    let mut prompt = ScriptedPrompt::default();

    click_widget(&mut editor, &mut prompt, ZONE_NAME);
    tick(&mut editor, &mut prompt, |i| i.type_text(" Zone"));
    tick(&mut editor, &mut prompt, |i| i.press_key(KeyCode::Escape));
    let name = editor.menu.find(ZONE_NAME).expect("name");
    assert_eq!(editor.menu.items()[name].text, "Zone Name");
    assert_eq!(editor.zone().name, "Zone Name");
    assert_eq!(editor.menu.selected(), None);
}

#[test]
fn clicking_the_map_commits_the_edit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut editor = editor_in(dir.path());
    let mut prompt = ScriptedPrompt::default();

    click_widget(&mut editor, &mut prompt, ZONE_NAME);
    tick(&mut editor, &mut prompt, |i| i.type_text("s"));
    tick(&mut editor, &mut prompt, |i| {
        i.move_mouse(vec2(100.0, 100.0));
        i.click(MouseButton::Left);
    });
    assert_eq!(editor.zone().name, "Zone Names");
    assert_eq!(editor.menu.selected(), None);
}

#[test]
fn save_button_writes_zone_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut editor = editor_in(dir.path());
    let mut prompt = ScriptedPrompt::default();

    click_widget(&mut editor, &mut prompt, SAVE_BUTTON);
    tick(&mut editor, &mut prompt, |_| {});
    assert!(dir.path().join("ZN1.zone").exists());
    assert_eq!(editor.menu.selected(), None);
    assert!(prompt.errors.is_empty());
}

#[test]
fn new_button_asks_before_replacing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut editor = editor_in(dir.path());
    let mut prompt = ScriptedPrompt::default();

    click_widget(&mut editor, &mut prompt, NEW_BUTTON);
    tick(&mut editor, &mut prompt, |_| {});
    assert_eq!(prompt.confirms, 1);
    assert!(editor.take_pending_zone().is_none());

    prompt.confirm_answer = true;
    click_widget(&mut editor, &mut prompt, NEW_BUTTON);
    tick(&mut editor, &mut prompt, |_| {});
    let fresh = editor.take_pending_zone().expect("pending zone");
    assert!(fresh.tiles().iter().all(|t| *t == Tile::default()));
}

#[test]
fn load_button_stages_opened_zone() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut stored = Zone::new("Chemical Plant", 2, BLACK, "Chemical_Plant.png", 100, 64);
    stored.paint(1, 2, 33, false, true);
    let path = save_zone(&stored, dir.path()).expect("save");

    let mut editor = editor_in(dir.path());
    let mut prompt = ScriptedPrompt {
        pick: Some(path),
        ..ScriptedPrompt::default()
    };
    click_widget(&mut editor, &mut prompt, LOAD_BUTTON);
    tick(&mut editor, &mut prompt, |_| {});

    let zone = editor.take_pending_zone().expect("pending zone");
    assert_eq!(zone.name, "Chemical Plant");
    editor.install_zone(zone);
    assert_eq!(editor.zone().act, 2);
    assert_eq!(editor.zone().tile(1, 2).map(|t| t.tile_index), Some(33));
    let act = editor.menu.find(ACT_NO).expect("act");
    assert_eq!(editor.menu.items()[act].text, "2");
}

#[test]
fn malformed_load_keeps_current_zone() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bad = dir.path().join("BAD1.zone");
    std::fs::write(&bad, "Zone Name: Bad\nnope\n").expect("write");

    let mut editor = editor_in(dir.path());
    editor.active_tile = 9;
    tick(&mut editor, &mut ScriptedPrompt::default(), |i| {
        i.move_mouse(vec2(8.0, 8.0));
        i.click(MouseButton::Left);
    });

    let mut prompt = ScriptedPrompt {
        pick: Some(bad),
        ..ScriptedPrompt::default()
    };
    click_widget(&mut editor, &mut prompt, LOAD_BUTTON);
    tick(&mut editor, &mut prompt, |_| {});

    assert!(editor.take_pending_zone().is_none());
    assert_eq!(prompt.errors.len(), 1);
    assert_eq!(editor.zone().tile(0, 0).map(|t| t.tile_index), Some(9));
}
