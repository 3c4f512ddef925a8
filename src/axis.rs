//! Axis scaling - picks a round maximum, an increment and tick labels for an axis.
//!
//! Two entry points:
//! - [`compute_axis`] for a value axis driven by the data range
//! - [`compute_category_axis`] for a horizontal axis with one slot per record

use log::debug;
use serde::Serialize;

use crate::error::{ChartError, Result};

/// Pixels reserved per tick interval on a value axis
pub const TICK_SPACING_PX: f64 = 40.0;

/// Scale derived for one axis during a render call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledAxis {
    pub max: f64,
    pub increment: f64,
    /// Tick values, ascending from 0 to `max`
    pub labels: Vec<f64>,
}

impl ScaledAxis {
    /// Number of intervals between the tick labels
    pub fn step_count(&self) -> usize {
        self.labels.len().saturating_sub(1)
    }
}

/// Power-of-ten bucket the rounded maximum snaps to.
///
/// Values in (10, 100] snap to multiples of 10, values in (100, 1000] to
/// multiples of 100, and so on. Callers pass the largest observed value, not the
/// margin-adjusted top, so 90 with a 1.15 margin still snaps to tens.
pub fn magnitude(value: f64) -> i32 {
    value.log10().ceil() as i32 - 1
}

/// Scale a value axis from one column of the dataset.
///
/// The maximum is the largest value times `margin_factor`, rounded up to the
/// next multiple of `10^magnitude(largest)`. The bucket comes from the largest
/// value before the margin is applied: `[90]` at 1.15 gives 110, not 200.
/// One tick is placed every [`TICK_SPACING_PX`] pixels of `dimension_px`.
pub fn compute_axis(values: &[f64], dimension_px: f64, margin_factor: f64) -> Result<ScaledAxis> {
    if values.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let largest = sorted[sorted.len() - 1];
    if !largest.is_finite() || largest <= 0.0 {
        return Err(ChartError::DegenerateRange { max: largest });
    }

    let step_count = step_count(dimension_px)?;

    let top = largest * margin_factor;
    let multiple = 10f64.powi(magnitude(largest));
    let max = round_to_multiple(top, multiple);
    let increment = max / step_count as f64;

    debug!(
        "value axis: largest={} top={} max={} increment={} steps={}",
        largest, top, max, increment, step_count
    );

    Ok(ScaledAxis {
        max,
        increment,
        labels: tick_labels(increment, step_count),
    })
}

/// Scale a horizontal axis that gives every record one slot of equal width.
///
/// `aspect_adjusted_max` is normally `width / height * vertical_max`, which keeps
/// canvas units square.
pub fn compute_category_axis(record_count: usize, aspect_adjusted_max: f64) -> Result<ScaledAxis> {
    if record_count == 0 {
        return Err(ChartError::EmptyDataset);
    }
    if !aspect_adjusted_max.is_finite() || aspect_adjusted_max <= 0.0 {
        return Err(ChartError::InvalidDimension {
            dimension: aspect_adjusted_max,
        });
    }

    let increment = aspect_adjusted_max / record_count as f64;
    debug!(
        "category axis: max={} increment={} slots={}",
        aspect_adjusted_max, increment, record_count
    );

    Ok(ScaledAxis {
        max: aspect_adjusted_max,
        increment,
        labels: tick_labels(increment, record_count),
    })
}

fn step_count(dimension_px: f64) -> Result<usize> {
    let steps = (dimension_px / TICK_SPACING_PX).floor();
    // NaN fails this comparison too
    if !(steps >= 1.0) || !steps.is_finite() {
        return Err(ChartError::InvalidDimension {
            dimension: dimension_px,
        });
    }
    Ok(steps as usize)
}

fn round_to_multiple(number: f64, multiple: f64) -> f64 {
    (number / multiple).ceil() * multiple
}

fn tick_labels(increment: f64, steps: usize) -> Vec<f64> {
    (0..=steps).map(|i| i as f64 * increment).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_small_dataset() {
        let axis = compute_axis(&[10.0, 45.0, 90.0], 400.0, 1.15).unwrap();
        assert_eq!(axis.max, 110.0);
        assert_eq!(axis.step_count(), 10);
        assert_eq!(axis.increment, 11.0);
        let expected: Vec<f64> = (0..=10).map(|i| (i * 11) as f64).collect();
        assert_eq!(axis.labels, expected);
    }

    #[test]
    fn test_magnitude_buckets() {
        assert_eq!(magnitude(85.0), 1);
        assert_eq!(magnitude(850.0), 2);
        assert_eq!(magnitude(5.0), 0);
        assert_eq!(magnitude(0.5), -1);
    }

    #[test]
    fn test_bucket_from_largest_before_margin() {
        // 90 * 1.15 = 103.5 crosses into the hundreds, the bucket stays at tens
        assert_eq!(magnitude(90.0 * 1.15), 2);
        let axis = compute_axis(&[90.0], 400.0, 1.15).unwrap();
        assert_eq!(axis.max, 110.0);

        let axis = compute_axis(&[9.0], 400.0, 1.2).unwrap();
        assert_eq!(axis.max, 11.0);
    }

    #[test]
    fn test_rounds_up_never_down() {
        let axis = compute_axis(&[850.0], 400.0, 1.2).unwrap();
        assert_eq!(axis.max, 1100.0);

        let axis = compute_axis(&[4.0, 2.0], 80.0, 1.2).unwrap();
        assert_eq!(axis.max, 5.0);
        assert_eq!(axis.labels, vec![0.0, 2.5, 5.0]);
    }

    #[test]
    fn test_max_covers_margin() {
        let datasets: [&[f64]; 6] = [
            &[1.0],
            &[0.3, 0.7],
            &[12.0, 99.0, 3.0],
            &[999.0, 1.0],
            &[1234.5, 17.0],
            &[48213.0, 5.0, 7.0],
        ];
        for values in datasets {
            for margin in [1.15, 1.2] {
                let axis = compute_axis(values, 300.0, margin).unwrap();
                let largest = values.iter().cloned().fold(f64::MIN, f64::max);
                assert!(
                    axis.max >= largest * margin,
                    "max {} below {} * {}",
                    axis.max,
                    largest,
                    margin
                );
                let multiple = 10f64.powi(magnitude(largest));
                let ratio = axis.max / multiple;
                assert!((ratio - ratio.round()).abs() < 1e-9, "{} not a multiple of {}", axis.max, multiple);
            }
        }
    }

    #[test]
    fn test_labels_shape() {
        for dimension in [40.0, 79.0, 120.0, 415.0, 1000.0] {
            let axis = compute_axis(&[3.0, 72.0], dimension, 1.15).unwrap();
            let steps = (dimension / 40.0).floor() as usize;
            assert_eq!(axis.labels.len(), steps + 1);
            assert_eq!(axis.labels[0], 0.0);
            assert_eq!(axis.labels[steps], axis.increment * steps as f64);
            assert!(axis.labels.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_ties_and_order_do_not_matter() {
        let a = compute_axis(&[90.0, 10.0, 90.0], 400.0, 1.15).unwrap();
        let b = compute_axis(&[10.0, 90.0], 400.0, 1.15).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_idempotent_and_input_untouched() {
        let values = vec![45.0, 10.0, 90.0];
        let first = compute_axis(&values, 400.0, 1.15).unwrap();
        let second = compute_axis(&values, 400.0, 1.15).unwrap();
        assert_eq!(first, second);
        assert_eq!(values, vec![45.0, 10.0, 90.0]);
    }

    #[test]
    fn test_empty_values() {
        assert!(matches!(
            compute_axis(&[], 400.0, 1.15),
            Err(ChartError::EmptyDataset)
        ));
    }

    #[test]
    fn test_degenerate_range() {
        assert!(matches!(
            compute_axis(&[0.0, -4.0], 400.0, 1.15),
            Err(ChartError::DegenerateRange { .. })
        ));
        assert!(matches!(
            compute_axis(&[f64::INFINITY], 400.0, 1.15),
            Err(ChartError::DegenerateRange { .. })
        ));
    }

    #[test]
    fn test_dimension_too_small() {
        match compute_axis(&[10.0], 30.0, 1.15) {
            Err(ChartError::InvalidDimension { dimension }) => assert_eq!(dimension, 30.0),
            other => panic!("Expected InvalidDimension, got {:?}", other),
        }
        assert!(matches!(
            compute_axis(&[10.0], f64::NAN, 1.15),
            Err(ChartError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_category_axis() {
        let axis = compute_category_axis(4, 165.0).unwrap();
        assert_eq!(axis.max, 165.0);
        assert_eq!(axis.increment, 41.25);
        assert_eq!(axis.labels.len(), 5);
        assert_eq!(axis.labels[4], 165.0);

        assert!(matches!(
            compute_category_axis(0, 165.0),
            Err(ChartError::EmptyDataset)
        ));
        assert!(matches!(
            compute_category_axis(3, 0.0),
            Err(ChartError::InvalidDimension { .. })
        ));
    }
}
