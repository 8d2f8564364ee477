use eframe::egui::Color32;
use palette::{named, Srgb, Srgba, WithAlpha};

// ---------------------------------------------------------------------------
// Marker styling
// ---------------------------------------------------------------------------

/// Opacity multiplier for the farthest marker when depth shading.
const FAR_ALPHA: f32 = 0.3;

/// Fixed look of the scatter markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub color: Srgb<u8>,
    /// Marker area in points², so the drawn diameter is `sqrt(size)`.
    pub size: f32,
    pub opacity: f32,
    /// Fade markers with distance from the viewer.
    pub depth_shade: bool,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: named::BLUE,
            size: 50.0,
            opacity: 0.6,
            depth_shade: true,
        }
    }
}

impl MarkerStyle {
    /// Radius of a circular marker in screen points.
    pub fn radius(&self) -> f32 {
        0.5 * self.size.sqrt()
    }

    /// Fill colour for a marker at relative depth `depth`
    /// (0 = nearest point, 1 = farthest).
    pub fn fill(&self, depth: f32) -> Color32 {
        let shade = if self.depth_shade {
            1.0 - (1.0 - FAR_ALPHA) * depth.clamp(0.0, 1.0)
        } else {
            1.0
        };
        to_color32(self.color.into_format::<f32>().with_alpha(self.opacity * shade))
    }
}

// ---------------------------------------------------------------------------
// Axes colours
// ---------------------------------------------------------------------------

/// Pane fill, a translucent light grey.
pub fn pane_fill() -> Color32 {
    to_color32(Srgba::new(0.95, 0.95, 0.95, 0.5))
}

/// Grid line colour.
pub fn grid_stroke() -> Color32 {
    to_color32(Srgb::new(0.8, 0.8, 0.8).with_alpha(1.0))
}

/// Axis lines, ticks and text.
pub fn foreground() -> Color32 {
    to_color32(named::BLACK.into_format::<f32>().with_alpha(1.0))
}

fn to_color32(c: Srgba<f32>) -> Color32 {
    let c: Srgba<u8> = c.into_format();
    Color32::from_rgba_unmultiplied(c.red, c.green, c.blue, c.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marker_is_translucent_blue() {
        let style = MarkerStyle::default();
        let c = style.fill(0.0);
        let expected = Color32::from_rgba_unmultiplied(0, 0, 255, 153);
        assert_eq!(c, expected);
    }

    #[test]
    fn test_marker_radius_from_area() {
        let style = MarkerStyle::default();
        assert!((style.radius() - 3.5355).abs() < 1e-3);
    }

    #[test]
    fn test_depth_shading_fades_far_points() {
        let style = MarkerStyle::default();
        let near = style.fill(0.0).a();
        let far = style.fill(1.0).a();
        assert!(far < near);
        // 0.6 * 0.3 of full opacity
        assert!((45..=46).contains(&far));
    }

    #[test]
    fn test_depth_shading_can_be_disabled() {
        let style = MarkerStyle {
            depth_shade: false,
            ..MarkerStyle::default()
        };
        assert_eq!(style.fill(0.0), style.fill(1.0));
    }
}
