use eframe::egui::Vec2;

/// Default view direction, the classic 3D axes angle.
pub const DEFAULT_ELEVATION: f32 = 30.0;
pub const DEFAULT_AZIMUTH: f32 = -60.0;

const MIN_ZOOM: f32 = 0.2;
const MAX_ZOOM: f32 = 10.0;

/// Degrees of rotation per dragged screen point.
const DRAG_SENSITIVITY: f32 = 0.5;

/// Orbit camera looking at the centre of the axes box, z up.
///
/// Angles are in degrees. The projection is orthographic, so only the view
/// direction and the zoom matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub azimuth: f32,
    pub elevation: f32,
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            azimuth: DEFAULT_AZIMUTH,
            elevation: DEFAULT_ELEVATION,
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// Rotate by a screen-space drag: horizontal spins the azimuth,
    /// vertical tilts the elevation.
    pub fn orbit(&mut self, drag: Vec2) {
        self.azimuth = wrap_degrees(self.azimuth - drag.x * DRAG_SENSITIVITY);
        self.elevation = (self.elevation + drag.y * DRAG_SENSITIVITY).clamp(-90.0, 90.0);
    }

    /// Multiply the zoom, e.g. by egui's `zoom_delta`.
    pub fn zoom_by(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    /// Screen-right, screen-up and towards-viewer unit vectors in world space.
    pub fn basis(&self) -> [[f32; 3]; 3] {
        let (sa, ca) = self.azimuth.to_radians().sin_cos();
        let (se, ce) = self.elevation.to_radians().sin_cos();
        let right = [-sa, ca, 0.0];
        let up = [-se * ca, -se * sa, ce];
        let toward = [ce * ca, ce * sa, se];
        [right, up, toward]
    }

    /// Project a normalised point to `(screen_x, screen_y_up, depth)`.
    /// Larger depth is closer to the viewer.
    pub fn project(&self, p: [f32; 3]) -> [f32; 3] {
        let [right, up, toward] = self.basis();
        [dot(p, right), dot(p, up), dot(p, toward)]
    }
}

pub fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}
