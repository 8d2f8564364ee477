// ---------------------------------------------------------------------------
// Axis tick placement
// ---------------------------------------------------------------------------

/// 2^53: the largest tick index every f64 step multiple can be built from.
const MAX_TICK_INDEX: f64 = 9_007_199_254_740_992.0;

/// Pick 1/2/5×10ⁿ tick values inside `[min, max]`, aiming for roughly
/// `target` ticks.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite() && max > min) || target == 0 {
        return Vec::new();
    }
    // Divide before subtracting so spans beyond f64::MAX stay finite.
    let n = target as f64;
    let step = nice_step(max / n - min / n);

    // Tick indices must fit exactly in both i64 and f64.
    let (lo, hi) = ((min / step).ceil(), (max / step).floor());
    if !(lo.abs() <= MAX_TICK_INDEX && hi.abs() <= MAX_TICK_INDEX) {
        return Vec::new();
    }

    let slack = step * 1e-9;
    (lo as i64..=hi as i64)
        .map(|i| i as f64 * step)
        .filter(|v| (min - slack..=max + slack).contains(v))
        // -0 would print as "-0"
        .map(|v| if v == 0.0 { 0.0 } else { v })
        .collect()
}

/// Round a raw step up to the next 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Format a tick value with just enough decimals for its step.
///
/// Magnitudes from 1e9 up switch to exponent notation.
pub fn format_tick(value: f64, ticks: &[f64]) -> String {
    if value.abs() >= 1e9 {
        return format!("{value:e}");
    }
    let step = match ticks {
        [a, b, ..] => (b - a).abs(),
        _ => return format!("{value}"),
    };
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ticks(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn test_ticks_unit_range() {
        assert_ticks(&nice_ticks(0.0, 1.0, 5), &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_ticks_large_range() {
        assert_ticks(
            &nice_ticks(0.0, 100_000.0, 5),
            &[0.0, 20_000.0, 40_000.0, 60_000.0, 80_000.0, 100_000.0],
        );
    }

    #[test]
    fn test_ticks_stay_inside_range() {
        let ticks = nice_ticks(-3.7, 12.1, 5);
        assert_ticks(&ticks, &[0.0, 5.0, 10.0]);
        assert!(ticks.iter().all(|&t| (-3.7..=12.1).contains(&t)));
    }

    #[test]
    fn test_ticks_span_wider_than_f64_max() {
        let ticks = nice_ticks(-1e308, 1e308, 5);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| t.is_finite() && t.abs() <= 1.000_001e308));
    }

    #[test]
    fn test_ticks_with_unrepresentable_index_are_dropped() {
        // One ulp of range at 1e300: min / step is far beyond 2^53.
        let min = 1e300_f64;
        let ticks = nice_ticks(min, f64::from_bits(min.to_bits() + 1), 5);
        assert!(ticks.is_empty());
    }

    #[test]
    fn test_ticks_far_from_zero_stay_in_range() {
        let (min, max) = (1e17 - 1e8, 1e17 + 1e8);
        let ticks = nice_ticks(min, max, 5);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| (min..=max).contains(t)));
    }

    #[test]
    fn test_ticks_degenerate_range() {
        assert!(nice_ticks(2.0, 2.0, 5).is_empty());
        assert!(nice_ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_no_negative_zero() {
        let ticks = nice_ticks(-1.0, 1.0, 4);
        assert!(ticks.contains(&0.0));
        assert!(ticks.iter().all(|t| !(t.is_sign_negative() && *t == 0.0)));
    }

    #[test]
    fn test_format_uses_step_precision() {
        let ticks = nice_ticks(0.0, 1.0, 5);
        assert_eq!(format_tick(ticks[3], &ticks), "0.6");
        let ticks = nice_ticks(0.0, 100_000.0, 5);
        assert_eq!(format_tick(ticks[1], &ticks), "20000");
        assert_eq!(format_tick(4.5, &[4.5]), "4.5");
        assert_eq!(format_tick(-2e17, &[-2e17, 0.0]), "-2e17");
    }
}
