// ---------------------------------------------------------------------------
// Point3 – one row of the input file
// ---------------------------------------------------------------------------

/// A single point, parsed from one `x,y,z` line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Coordinates in axis order.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

// ---------------------------------------------------------------------------
// Bounds – axis-aligned extent of a table
// ---------------------------------------------------------------------------

/// Per-axis `[min, max]` ranges, indexed x, y, z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Bounds {
    /// Unit cube used when there is nothing to plot.
    pub const UNIT: Bounds = Bounds {
        min: [0.0; 3],
        max: [1.0; 3],
    };

    /// Widen any zero-width axis so it can be normalised.
    ///
    /// The pad is ±0.5, or ±1e-9 of the value when that is larger, so a flat
    /// axis far from zero still gains a representable width.
    pub fn padded(mut self) -> Self {
        for axis in 0..3 {
            if self.max[axis] - self.min[axis] <= 0.0 {
                let pad = 0.5_f64.max(self.min[axis].abs() * 1e-9);
                self.min[axis] = (self.min[axis] - pad).max(f64::MIN);
                self.max[axis] = (self.max[axis] + pad).min(f64::MAX);
            }
        }
        self
    }

    // Halve before combining so ranges near ±f64::MAX stay finite.
    pub fn center(&self, axis: usize) -> f64 {
        self.min[axis] * 0.5 + self.max[axis] * 0.5
    }

    pub fn half_extent(&self, axis: usize) -> f64 {
        self.max[axis] * 0.5 - self.min[axis] * 0.5
    }

    /// Map a value on `axis` into `[-1, 1]`.
    ///
    /// An axis with no usable width maps everything to 0.
    pub fn normalize(&self, axis: usize, value: f64) -> f64 {
        let half = self.half_extent(axis);
        if !(half > 0.0 && half.is_finite()) {
            return 0.0;
        }
        (value - self.center(axis)) / half
    }
}

// ---------------------------------------------------------------------------
// PointTable – the complete loaded input
// ---------------------------------------------------------------------------

/// Ordered list of parsed points. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointTable {
    points: Vec<Point3>,
}

impl PointTable {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Tight bounds of all points, or `None` for an empty table.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.points.first()?.to_array();
        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for p in &self.points[1..] {
            for (axis, v) in p.to_array().into_iter().enumerate() {
                bounds.min[axis] = bounds.min[axis].min(v);
                bounds.max[axis] = bounds.max[axis].max(v);
            }
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_of_empty_table() {
        assert_eq!(PointTable::default().bounds(), None);
    }

    #[test]
    fn test_bounds_cover_all_points() {
        let table = PointTable::new(vec![
            Point3::new(1.0, -2.0, 3.0),
            Point3::new(-4.0, 5.0, 0.5),
            Point3::new(2.0, 0.0, 9.0),
        ]);
        let bounds = table.bounds().unwrap();
        assert_eq!(bounds.min, [-4.0, -2.0, 0.5]);
        assert_eq!(bounds.max, [2.0, 5.0, 9.0]);
    }

    #[test]
    fn test_padding_only_touches_flat_axes() {
        let table = PointTable::new(vec![Point3::new(1.0, 2.0, 3.0), Point3::new(1.0, 4.0, 3.0)]);
        let bounds = table.bounds().unwrap().padded();
        assert_eq!(bounds.min, [0.5, 2.0, 2.5]);
        assert_eq!(bounds.max, [1.5, 4.0, 3.5]);
    }

    #[test]
    fn test_normalize_maps_range_to_unit_interval() {
        let bounds = Bounds {
            min: [0.0, 10.0, -5.0],
            max: [4.0, 20.0, 5.0],
        };
        assert_eq!(bounds.normalize(0, 0.0), -1.0);
        assert_eq!(bounds.normalize(0, 4.0), 1.0);
        assert_eq!(bounds.normalize(1, 15.0), 0.0);
        assert_eq!(bounds.normalize(2, 2.5), 0.5);
    }

    #[test]
    fn test_flat_axis_far_from_zero_gets_width() {
        let table = PointTable::new(vec![Point3::new(1e17, 0.0, 0.0), Point3::new(1e17, 5.0, 5.0)]);
        let bounds = table.bounds().unwrap().padded();
        assert!(bounds.max[0] > bounds.min[0]);
        assert_eq!(bounds.normalize(0, 1e17), 0.0);
    }

    #[test]
    fn test_flat_axis_at_f64_max_stays_finite() {
        let bounds = Bounds {
            min: [f64::MAX, 0.0, 0.0],
            max: [f64::MAX, 1.0, 1.0],
        }
        .padded();
        assert!(bounds.min[0].is_finite() && bounds.max[0].is_finite());
        assert!(bounds.normalize(0, f64::MAX).is_finite());
    }

    #[test]
    fn test_zero_width_axis_normalizes_to_zero() {
        let bounds = Bounds {
            min: [3.0; 3],
            max: [3.0; 3],
        };
        assert_eq!(bounds.normalize(1, 3.0), 0.0);
    }

    #[test]
    fn test_span_wider_than_f64_max_normalizes() {
        let table = PointTable::new(vec![
            Point3::new(1e308, 1e308, 1e308),
            Point3::new(-1e308, -1e308, -1e308),
            Point3::new(0.0, 0.0, 0.0),
        ]);
        let bounds = table.bounds().unwrap().padded();
        for axis in 0..3 {
            assert_eq!(bounds.center(axis), 0.0);
            assert_eq!(bounds.half_extent(axis), 1e308);
            assert_eq!(bounds.normalize(axis, 1e308), 1.0);
            assert_eq!(bounds.normalize(axis, -1e308), -1.0);
            assert_eq!(bounds.normalize(axis, 0.0), 0.0);
        }
    }
}
