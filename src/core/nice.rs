//! Rounded y-axis intervals guaranteeing a minimum gridline count.

/// Ascending candidate gridline intervals.
pub const NICE_INTERVALS: [f64; 19] = [
    0.001, 0.002, 0.005, 0.01, 0.02, 0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0,
    200.0, 500.0, 1000.0,
];

// Quotients this close to an integer are treated as exact multiples.
const MULTIPLE_EPSILON: f64 = 1e-9;

fn floor_multiple(value: f64, interval: f64) -> f64 {
    let quotient = value / interval;
    let rounded = quotient.round();
    let steps = if (quotient - rounded).abs() < MULTIPLE_EPSILON {
        rounded
    } else {
        quotient.floor()
    };
    snap(steps * interval)
}

fn ceil_multiple(value: f64, interval: f64) -> f64 {
    let quotient = value / interval;
    let rounded = quotient.round();
    let steps = if (quotient - rounded).abs() < MULTIPLE_EPSILON {
        rounded
    } else {
        quotient.ceil()
    };
    snap(steps * interval)
}

/// Removes binary representation noise such as `7 * 0.05 = 0.35000000000000003`.
fn snap(value: f64) -> f64 {
    let snapped = (value * 1e9).round() / 1e9;
    if !snapped.is_finite() {
        value
    } else if snapped == 0.0 {
        0.0
    } else {
        snapped
    }
}

/// `[floor(min/i)*i, ceil(max/i)*i]`.
#[must_use]
pub fn nice_domain(min: f64, max: f64, interval: f64) -> (f64, f64) {
    (floor_multiple(min, interval), ceil_multiple(max, interval))
}

/// Number of whole intervals the nice domain of `[min, max]` spans.
#[must_use]
pub fn interval_count(min: f64, max: f64, interval: f64) -> usize {
    let (low, high) = nice_domain(min, max, interval);
    let steps = ((high - low) / interval).round();
    if steps.is_finite() && steps > 0.0 {
        steps as usize
    } else {
        0
    }
}

/// Largest candidate interval whose nice domain spans at least
/// `minimum_ticks` whole intervals (so more than `minimum_ticks` gridlines).
///
/// Falls back to the smallest candidate when none qualifies.
#[must_use]
pub fn select_nice_interval(min: f64, max: f64, minimum_ticks: usize) -> f64 {
    NICE_INTERVALS
        .iter()
        .rev()
        .copied()
        .find(|interval| interval_count(min, max, *interval) >= minimum_ticks)
        .unwrap_or(NICE_INTERVALS[0])
}

/// Returns the interval to grid an explicit domain with, if the domain is
/// already aligned to a candidate interval that satisfies `minimum_ticks`.
#[must_use]
pub fn aligned_interval(min: f64, max: f64, minimum_ticks: usize) -> Option<f64> {
    NICE_INTERVALS.iter().rev().copied().find(|interval| {
        let (low, high) = nice_domain(min, max, *interval);
        (low - min).abs() < MULTIPLE_EPSILON
            && (high - max).abs() < MULTIPLE_EPSILON
            && interval_count(min, max, *interval) >= minimum_ticks
    })
}

/// Most intervals a grid may span for a given tick minimum.
#[must_use]
pub fn max_grid_intervals(minimum_ticks: usize) -> usize {
    minimum_ticks.max(1).saturating_mul(10)
}

/// Gridline values from `domain.0` to `domain.1` inclusive.
///
/// One line per interval while the domain spans at most `max_intervals` of
/// them. Wider domains step by the smallest whole multiple of `interval`
/// that fits, and the last line is always `domain.1`.
#[must_use]
pub fn grid_values(domain: (f64, f64), interval: f64, max_intervals: usize) -> Vec<f64> {
    let count = interval_count(domain.0, domain.1, interval);
    let stride = count.div_ceil(max_intervals.max(1)).max(1);
    let step = interval * stride as f64;
    let tolerance = interval * 1e-6;
    let mut values: Vec<f64> = (0..=count / stride)
        .map(|index| snap(domain.0 + index as f64 * step))
        .filter(|value| *value <= domain.1 + tolerance)
        .collect();
    if values.last().is_some_and(|last| *last < domain.1 - tolerance) {
        values.push(snap(domain.1));
    }
    values
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn probability_range_picks_five_hundredths() {
        let interval = select_nice_interval(0.12, 0.34, 4);
        assert_abs_diff_eq!(interval, 0.05);
        let (low, high) = nice_domain(0.12, 0.34, interval);
        assert_abs_diff_eq!(low, 0.10, epsilon = 1e-12);
        assert_abs_diff_eq!(high, 0.35, epsilon = 1e-12);
    }

    #[test]
    fn exact_multiples_are_not_pushed_outward() {
        assert_eq!(nice_domain(0.3, 0.6, 0.1), (0.3, 0.6));
        assert_eq!(nice_domain(-20.0, 40.0, 20.0), (-20.0, 40.0));
    }

    #[test]
    fn tiny_range_falls_back_to_smallest_candidate() {
        let interval = select_nice_interval(0.5000, 0.5001, 4);
        assert_eq!(interval, NICE_INTERVALS[0]);
    }

    #[test]
    fn large_pnl_range_uses_large_interval() {
        let interval = select_nice_interval(-1_250.0, 3_800.0, 4);
        assert_eq!(interval, 1000.0);
        assert_eq!(nice_domain(-1_250.0, 3_800.0, interval), (-2000.0, 4000.0));
    }

    #[test]
    fn aligned_explicit_domain_is_kept() {
        assert_eq!(aligned_interval(0.0, 1.0, 4), Some(0.2));
        assert_eq!(aligned_interval(0.03, 0.97, 4), Some(0.01));
        assert_eq!(aligned_interval(0.0005, 1.0, 4), None);
    }

    #[test]
    fn grid_values_cover_domain_inclusive() {
        let values = grid_values((0.10, 0.35), 0.05, max_grid_intervals(4));
        assert_eq!(values, vec![0.1, 0.15, 0.2, 0.25, 0.3, 0.35]);
    }

    #[test]
    fn huge_domains_are_gridded_with_a_bounded_stride() {
        let limit = max_grid_intervals(4);
        let interval = select_nice_interval(0.0, 1e12, 4);
        assert_eq!(interval, 1000.0);

        let values = grid_values((0.0, 1e12), interval, limit);
        assert!(values.len() <= limit + 2, "{} gridlines", values.len());
        assert_eq!(values.first().copied(), Some(0.0));
        assert_abs_diff_eq!(*values.last().expect("last"), 1e12, epsilon = 1e-3);
        for pair in values.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn uneven_stride_still_ends_on_domain_max() {
        // 7 intervals capped at 3 -> stride 3 covers 0, 3, 6 and then 7.
        assert_eq!(grid_values((0.0, 7.0), 1.0, 3), vec![0.0, 3.0, 6.0, 7.0]);
    }
}
