use eframe::egui::{Align2, Color32, FontId, Painter, Sense, Shape, Stroke, Ui};

use crate::color::{foreground, grid_stroke, pane_fill};
use crate::state::AppState;

use super::scene::Scene;

/// Screen points of scroll that double or halve the zoom.
const SCROLL_ZOOM_RATE: f32 = 0.002;

// ---------------------------------------------------------------------------
// 3D scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter plot in the central panel.
///
/// Drag rotates the view, scroll or pinch zooms, double-click resets.
pub fn scatter_plot(ui: &mut Ui, state: &mut AppState) {
    let available = ui.available_size();
    let (response, painter) = ui.allocate_painter(available, Sense::click_and_drag());

    if response.dragged() {
        state.camera.orbit(response.drag_delta());
    }
    if response.hovered() {
        let (zoom, scroll) = ui.input(|i| (i.zoom_delta(), i.smooth_scroll_delta.y));
        state.camera.zoom_by(zoom);
        if scroll != 0.0 {
            state.camera.zoom_by((scroll * SCROLL_ZOOM_RATE).exp());
        }
    }
    if response.double_clicked() {
        state.reset_view();
    }

    let scene = Scene::build(&state.table, &state.style, &state.camera, response.rect);

    painter.rect_filled(response.rect, 0.0, Color32::WHITE);
    paint_scene(&painter, &scene);

    // Coordinates of the frontmost marker under the pointer.
    if let Some(pointer) = response.hover_pos() {
        let hit = scene
            .markers
            .iter()
            .rev()
            .find(|m| (m.pos - pointer).length() <= m.radius);
        if let Some(marker) = hit {
            let p = state.table.points()[marker.index];
            response.on_hover_text_at_pointer(format!(
                "#{}  ({}, {}, {})",
                marker.index, p.x, p.y, p.z
            ));
        }
    }
}

fn paint_scene(painter: &Painter, scene: &Scene) {
    let fg = foreground();

    for pane in &scene.panes {
        painter.add(Shape::convex_polygon(pane.to_vec(), pane_fill(), Stroke::NONE));
    }
    for &line in &scene.grid_lines {
        painter.line_segment(line, Stroke::new(0.8, grid_stroke()));
    }

    for axis in &scene.axes {
        painter.line_segment(axis.line, Stroke::new(1.0, fg));
        for tick in &axis.ticks {
            painter.line_segment(tick.mark, Stroke::new(1.0, fg));
            painter.text(
                tick.label_pos,
                Align2::CENTER_CENTER,
                &tick.label,
                FontId::proportional(11.0),
                fg,
            );
        }
        painter.text(
            axis.label_pos,
            Align2::CENTER_CENTER,
            axis.label,
            FontId::proportional(13.0),
            fg,
        );
    }

    for marker in &scene.markers {
        painter.circle_filled(marker.pos, marker.radius, marker.fill);
    }

    painter.text(
        scene.title_pos,
        Align2::CENTER_CENTER,
        scene.title,
        FontId::proportional(16.0),
        fg,
    );
}
