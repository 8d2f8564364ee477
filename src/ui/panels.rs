use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: what was loaded and a view reset.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!(
            "{} points from {}",
            state.table.len(),
            state.source.display()
        ));

        ui.separator();

        if ui.button("Reset view").clicked() {
            state.reset_view();
        }

        ui.separator();

        let c = state.camera;
        ui.label(
            RichText::new(format!(
                "azim {:.0}°  elev {:.0}°  zoom {:.2}×",
                c.azimuth, c.elevation, c.zoom
            ))
            .weak(),
        );
    });
}
