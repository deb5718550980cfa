//! Terminal chart rendering for AQI series
//!
//! Owns the axis scaling and rasterization the dashboard views share: pick
//! "nice" tick steps from the value range, then plot one column per point
//! into a fixed-height character grid.

use crate::error::VayuError;

/// Vertical axis bounds and tick step for a value range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    /// Lowest axis value (at or below the series minimum)
    pub lo: f64,
    /// Highest axis value (at or above the series maximum)
    pub hi: f64,
    /// Tick step (1, 2 or 5 times a power of ten)
    pub step: f64,
}

impl Axis {
    /// Fit an axis around `[min, max]` aiming for `target_ticks` ticks
    #[must_use]
    pub fn fit(min: f64, max: f64, target_ticks: usize) -> Self {
        let ticks = target_ticks.max(2);
        let span = if (max - min).abs() < f64::EPSILON {
            1.0
        } else {
            max - min
        };

        let step = nice_step(span / (ticks - 1) as f64);
        let lo = (min / step).floor() * step;
        let mut hi = (max / step).ceil() * step;
        if (hi - lo).abs() < f64::EPSILON {
            hi = lo + step;
        }

        Axis { lo, hi, step }
    }

    /// Tick values from `lo` to `hi` inclusive
    #[must_use]
    pub fn ticks(&self) -> Vec<f64> {
        let mut ticks = Vec::new();
        let mut value = self.lo;
        while value <= self.hi + self.step / 2.0 {
            ticks.push(value);
            value += self.step;
        }
        ticks
    }
}

/// Round a raw step up to 1, 2 or 5 times a power of ten
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.abs().max(f64::MIN_POSITIVE).log10().floor());
    let residual = raw / magnitude;
    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Plot a labelled series as a fixed-height character grid
///
/// One column per point, y-axis labels on the left, the first and last
/// point labels under the x-axis. Fails on an empty series or a height
/// below two rows.
pub fn render(points: &[(String, f64)], height: usize) -> Result<String, VayuError> {
    if points.is_empty() {
        return Err(VayuError::render("cannot chart an empty series"));
    }
    if height < 2 {
        return Err(VayuError::render("chart height must be at least 2 rows"));
    }

    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let axis = Axis::fit(min, max, height.min(6));

    // Row index of each point's mark, measured from the bottom
    let rows: Vec<usize> = values
        .iter()
        .map(|v| {
            let normalized = (v - axis.lo) / (axis.hi - axis.lo);
            ((normalized * (height - 1) as f64).round() as usize).min(height - 1)
        })
        .collect();

    let mut out = String::new();
    for screen_row in (0..height).rev() {
        let axis_value = axis.lo + (axis.hi - axis.lo) * screen_row as f64 / (height - 1) as f64;
        out.push_str(&format!("{axis_value:>6.0} |"));
        for &row in &rows {
            out.push(if row == screen_row { '*' } else { ' ' });
            out.push(' ');
        }
        out.push('\n');
    }

    out.push_str("       +");
    out.push_str(&"-".repeat(points.len() * 2));
    out.push('\n');
    out.push_str(&format!(
        "        {}  ..  {}\n",
        points[0].0,
        points[points.len() - 1].0
    ));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.7, 1.0)]
    #[case(1.3, 2.0)]
    #[case(4.0, 5.0)]
    #[case(7.0, 10.0)]
    #[case(23.0, 50.0)]
    #[case(130.0, 200.0)]
    fn test_nice_step_rounds_up(#[case] raw: f64, #[case] expected: f64) {
        assert!((nice_step(raw) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_axis_covers_range() {
        let axis = Axis::fit(83.0, 172.0, 5);
        assert!(axis.lo <= 83.0);
        assert!(axis.hi >= 172.0);

        let ticks = axis.ticks();
        assert!(ticks.len() >= 2);
        assert!((ticks[0] - axis.lo).abs() < 1e-9);
        assert!(*ticks.last().unwrap() >= 172.0);
    }

    #[test]
    fn test_axis_handles_flat_series() {
        let axis = Axis::fit(100.0, 100.0, 5);
        assert!(axis.lo <= 100.0);
        assert!(axis.hi > axis.lo);
    }

    #[test]
    fn test_render_marks_every_point() {
        let points: Vec<(String, f64)> = [95.0, 110.0, 88.0, 142.0, 60.0]
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("d{i}"), *v))
            .collect();

        let chart = render(&points, 8).unwrap();
        let marks = chart.chars().filter(|&c| c == '*').count();
        assert_eq!(marks, points.len());

        // Plot rows + axis line + label line
        assert_eq!(chart.lines().count(), 8 + 2);
    }

    #[test]
    fn test_render_rejects_bad_input() {
        assert!(render(&[], 8).is_err());
        assert!(render(&[("d0".to_string(), 50.0)], 1).is_err());
    }

    #[test]
    fn test_render_shows_endpoint_labels() {
        let points = vec![
            ("Aug 1".to_string(), 90.0),
            ("Aug 2".to_string(), 120.0),
            ("Aug 3".to_string(), 75.0),
        ];
        let chart = render(&points, 4).unwrap();
        assert!(chart.contains("Aug 1"));
        assert!(chart.contains("Aug 3"));
    }
}
