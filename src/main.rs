use log::{error, info};
use macroquad::prelude::*;
use std::path::Path;
use zone_editor::{App, EditorConfig, CONFIG_FILE};

fn load_config() -> EditorConfig {
    match EditorConfig::load(Path::new(CONFIG_FILE)) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e:#}, falling back to defaults");
            EditorConfig::default()
        }
    }
}

fn window_conf() -> Conf {
    let cfg = load_config();
    Conf {
        window_title: "Zone Editor".into(),
        window_width: cfg.window_width as i32,
        window_height: cfg.window_height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();
    info!(
        "assets from {}, zones saved to {}",
        config.asset_dir.display(),
        config.zone_dir.display()
    );
    App::new(config).run().await;
}
