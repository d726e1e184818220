#![warn(clippy::all, rust_2018_idioms)]

use std::env;

use sticker_sketchpad::{SketchApp, SketchConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = match env::args_os().nth(1) {
        Some(path) => SketchConfig::load(path)?,
        None => SketchConfig::default(),
    };

    let window_size = [
        config.canvas_width + 240.0,
        (config.canvas_height + 80.0).max(360.0),
    ];
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sticker Sketchpad")
            .with_inner_size(window_size)
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sticker Sketchpad",
        native_options,
        Box::new(|cc| Ok(Box::new(SketchApp::new(cc, config)))),
    )?;
    Ok(())
}
