mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::PointScatterApp;
use eframe::egui;
use state::AppState;

/// Puzzle input rendered by the viewer.
const INPUT_PATH: &str = "input/2025/day8.txt";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let source = PathBuf::from(INPUT_PATH);
    let table = match data::loader::load_points(&source) {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to load {}: {e}", source.display());
            return Err(e).with_context(|| format!("loading points from {}", source.display()));
        }
    };
    log::info!("Loaded {} points from {}", table.len(), source.display());
    if let Some(bounds) = table.bounds() {
        log::debug!("Bounds min {:?} max {:?}", bounds.min, bounds.max);
    }

    // 10×10 inch figure at 100 dpi.
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 1000.0])
            .with_min_inner_size([400.0, 400.0]),
        ..Default::default()
    };

    let state = AppState::new(table, source);
    eframe::run_native(
        ui::scene::TITLE,
        options,
        Box::new(move |cc| {
            // Dark text on a white canvas, like a printed figure.
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(PointScatterApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("viewer window failed: {e}"))
}
