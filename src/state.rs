use std::path::PathBuf;

use crate::color::MarkerStyle;
use crate::data::model::PointTable;
use crate::ui::camera::Camera;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct AppState {
    /// Points loaded at start-up; never modified.
    pub table: PointTable,

    /// File the table was read from.
    pub source: PathBuf,

    /// Marker look.
    pub style: MarkerStyle,

    /// Current view of the axes box.
    pub camera: Camera,
}

impl AppState {
    pub fn new(table: PointTable, source: PathBuf) -> Self {
        Self {
            table,
            source,
            style: MarkerStyle::default(),
            camera: Camera::default(),
        }
    }

    /// Back to the default viewing angle and zoom.
    pub fn reset_view(&mut self) {
        log::debug!("Resetting view");
        self.camera = Camera::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;

    #[test]
    fn test_reset_view_restores_default_camera() {
        let mut state = AppState::new(PointTable::default(), PathBuf::from("input/2025/day8.txt"));
        state.camera.orbit(vec2(40.0, -25.0));
        state.camera.zoom_by(3.0);
        assert_ne!(state.camera, Camera::default());

        state.reset_view();
        assert_eq!(state.camera, Camera::default());
    }
}
