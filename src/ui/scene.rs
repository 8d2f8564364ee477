use eframe::egui::{pos2, vec2, Color32, Pos2, Rect, Vec2};

use crate::color::MarkerStyle;
use crate::data::model::{Bounds, PointTable};

use super::camera::Camera;
use super::ticks::{format_tick, nice_ticks};

pub const TITLE: &str = "3D Point Visualization";
pub const AXIS_LABELS: [&str; 3] = ["X axis", "Y axis", "Z axis"];

const TARGET_TICKS: usize = 5;
const TITLE_HEIGHT: f32 = 36.0;
const TICK_LENGTH: f32 = 5.0;
const TICK_LABEL_OFFSET: f32 = 16.0;
const AXIS_LABEL_OFFSET: f32 = 42.0;

/// Half-diagonal of the normalised box plus room for labels, in box units.
const VIEW_RADIUS: f32 = 2.1;

// ---------------------------------------------------------------------------
// Scene – everything the plot paints, already in screen space
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Row of the point in the table.
    pub index: usize,
    pub pos: Pos2,
    pub radius: f32,
    pub fill: Color32,
    /// Larger is closer to the viewer.
    pub depth: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub mark: [Pos2; 2],
    pub label: String,
    pub label_pos: Pos2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisGuide {
    pub line: [Pos2; 2],
    pub ticks: Vec<Tick>,
    pub label: &'static str,
    pub label_pos: Pos2,
}

/// A projected 3D scatter plot.
///
/// Paint order is panes, grid lines, axes, then markers back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: &'static str,
    pub title_pos: Pos2,
    pub panes: Vec<[Pos2; 4]>,
    pub grid_lines: Vec<[Pos2; 2]>,
    pub axes: Vec<AxisGuide>,
    pub markers: Vec<Marker>,
}

impl Scene {
    /// Project `table` into `rect` as seen from `camera`.
    pub fn build(table: &PointTable, style: &MarkerStyle, camera: &Camera, rect: Rect) -> Self {
        let bounds = table.bounds().unwrap_or(Bounds::UNIT).padded();
        let plot_rect = Rect::from_min_max(rect.min + vec2(0.0, TITLE_HEIGHT), rect.max);
        let projector = Projector::new(camera, plot_rect);

        let ticks: [Vec<f64>; 3] =
            std::array::from_fn(|axis| nice_ticks(bounds.min[axis], bounds.max[axis], TARGET_TICKS));
        let back = back_sides(camera);

        Self {
            title: TITLE,
            title_pos: pos2(rect.center().x, rect.min.y + 0.5 * TITLE_HEIGHT),
            panes: panes(&projector, back),
            grid_lines: grid_lines(&projector, &bounds, &ticks, back),
            axes: axis_guides(&projector, &bounds, &ticks, back),
            markers: markers(&projector, table, &bounds, style),
        }
    }
}

// ---------------------------------------------------------------------------
// Projection into the plot rectangle
// ---------------------------------------------------------------------------

struct Projector<'a> {
    camera: &'a Camera,
    center: Pos2,
    scale: f32,
}

impl<'a> Projector<'a> {
    fn new(camera: &'a Camera, rect: Rect) -> Self {
        let scale = 0.5 * rect.width().min(rect.height()).max(0.0) / VIEW_RADIUS * camera.zoom;
        Self {
            camera,
            center: rect.center(),
            scale,
        }
    }

    /// Screen position and depth of a point in normalised box coordinates.
    fn to_screen(&self, p: [f32; 3]) -> (Pos2, f32) {
        let [sx, sy, depth] = self.camera.project(p);
        (self.center + vec2(sx, -sy) * self.scale, depth)
    }

    fn pos(&self, p: [f32; 3]) -> Pos2 {
        self.to_screen(p).0
    }

    /// Unit screen direction pointing away from the box centre.
    fn outward(&self, at: Pos2) -> Vec2 {
        let dir = at - self.center;
        if dir.length() > f32::EPSILON {
            dir.normalized()
        } else {
            vec2(0.0, 1.0)
        }
    }
}

/// For each axis, the box side (`-1` or `1`) facing away from the viewer.
fn back_sides(camera: &Camera) -> [f32; 3] {
    let [_, _, toward] = camera.basis();
    toward.map(|t| if t >= 0.0 { -1.0 } else { 1.0 })
}

/// Normalised coordinates with `values[axis]` placed on each axis.
fn at(axes: [usize; 3], values: [f32; 3]) -> [f32; 3] {
    let mut p = [0.0; 3];
    for (axis, v) in axes.into_iter().zip(values) {
        p[axis] = v;
    }
    p
}

fn normalized_ticks(bounds: &Bounds, ticks: &[Vec<f64>; 3], axis: usize) -> Vec<f32> {
    ticks[axis]
        .iter()
        .map(|&v| bounds.normalize(axis, v) as f32)
        .collect()
}

// ---------------------------------------------------------------------------
// Box panes and grid
// ---------------------------------------------------------------------------

fn panes(projector: &Projector<'_>, back: [f32; 3]) -> Vec<[Pos2; 4]> {
    (0..3)
        .map(|normal| {
            let (j, k) = ((normal + 1) % 3, (normal + 2) % 3);
            let axes = [normal, j, k];
            let side = back[normal];
            [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
                .map(|(a, b)| projector.pos(at(axes, [side, a, b])))
        })
        .collect()
}

fn grid_lines(
    projector: &Projector<'_>,
    bounds: &Bounds,
    ticks: &[Vec<f64>; 3],
    back: [f32; 3],
) -> Vec<[Pos2; 2]> {
    let mut lines = Vec::new();
    for normal in 0..3 {
        let side = back[normal];
        for (along, across) in [((normal + 1) % 3, (normal + 2) % 3), ((normal + 2) % 3, (normal + 1) % 3)] {
            let axes = [normal, along, across];
            for t in normalized_ticks(bounds, ticks, along) {
                lines.push([
                    projector.pos(at(axes, [side, t, -1.0])),
                    projector.pos(at(axes, [side, t, 1.0])),
                ]);
            }
        }
    }
    lines
}

// ---------------------------------------------------------------------------
// Axis lines, ticks and labels
// ---------------------------------------------------------------------------

fn axis_guides(
    projector: &Projector<'_>,
    bounds: &Bounds,
    ticks: &[Vec<f64>; 3],
    back: [f32; 3],
) -> Vec<AxisGuide> {
    // x and y run along the front edges of the floor pane.
    let x_edge = [0.0, -back[1], back[2]];
    let y_edge = [-back[0], 0.0, back[2]];

    // z runs up whichever side edge of the box lands further left.
    let candidates = [[back[0], -back[1], 0.0], [-back[0], back[1], 0.0]];
    let z_edge = if projector.pos(candidates[0]).x <= projector.pos(candidates[1]).x {
        candidates[0]
    } else {
        candidates[1]
    };

    [x_edge, y_edge, z_edge]
        .into_iter()
        .enumerate()
        .map(|(axis, edge)| axis_guide(projector, bounds, ticks, axis, edge))
        .collect()
}

fn axis_guide(
    projector: &Projector<'_>,
    bounds: &Bounds,
    ticks: &[Vec<f64>; 3],
    axis: usize,
    edge: [f32; 3],
) -> AxisGuide {
    let along = |t: f32| {
        let mut p = edge;
        p[axis] = t;
        projector.pos(p)
    };

    let line = [along(-1.0), along(1.0)];
    let guide_ticks = ticks[axis]
        .iter()
        .zip(normalized_ticks(bounds, ticks, axis))
        .map(|(&value, t)| {
            let pos = along(t);
            let out = projector.outward(pos);
            Tick {
                mark: [pos, pos + out * TICK_LENGTH],
                label: format_tick(value, &ticks[axis]),
                label_pos: pos + out * TICK_LABEL_OFFSET,
            }
        })
        .collect();

    let mid = along(0.0);
    AxisGuide {
        line,
        ticks: guide_ticks,
        label: AXIS_LABELS[axis],
        label_pos: mid + projector.outward(mid) * AXIS_LABEL_OFFSET,
    }
}

// ---------------------------------------------------------------------------
// Point markers
// ---------------------------------------------------------------------------

fn markers(
    projector: &Projector<'_>,
    table: &PointTable,
    bounds: &Bounds,
    style: &MarkerStyle,
) -> Vec<Marker> {
    let projected: Vec<(Pos2, f32)> = table
        .points()
        .iter()
        .map(|p| {
            let [x, y, z] = p.to_array();
            projector.to_screen([
                bounds.normalize(0, x) as f32,
                bounds.normalize(1, y) as f32,
                bounds.normalize(2, z) as f32,
            ])
        })
        .collect();

    let (nearest, farthest) = projected
        .iter()
        .fold((f32::NEG_INFINITY, f32::INFINITY), |(hi, lo), &(_, d)| (hi.max(d), lo.min(d)));
    let range = nearest - farthest;

    let mut markers: Vec<Marker> = projected
        .into_iter()
        .enumerate()
        .map(|(index, (pos, depth))| {
            let relative = if range > f32::EPSILON {
                (nearest - depth) / range
            } else {
                0.0
            };
            Marker {
                index,
                pos,
                radius: style.radius(),
                fill: style.fill(relative),
                depth,
            }
        })
        .collect();

    // Painter's algorithm: farthest first.
    markers.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    markers
}
