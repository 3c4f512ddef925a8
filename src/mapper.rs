//! Coordinate mapping from data space into rendering space.
//!
//! Rendering space has its origin at the top-left with y growing downward.

/// Default gutter reserved beside an axis for its rotated title, in px
pub const LABEL_GUTTER_PX: f64 = 40.0;

/// Flip a data value onto the downward-growing vertical axis.
///
/// Expects `value <= axis_max`, which the scaler's margin guarantees.
pub fn map_vertical(axis_max: f64, value: f64) -> f64 {
    axis_max - value
}

/// Left edge of the slot for the record at `index`
pub fn map_horizontal_slot(index: usize, increment: f64) -> f64 {
    index as f64 * increment
}

/// Offset that centers a rotated title along an axis `length_px` long
pub fn label_offset(length_px: f64, gutter_px: f64) -> f64 {
    gutter_px - length_px / 2.0
}

/// Convert a position in axis units to pixels along a `dimension_px` long axis
pub fn to_pixels(value: f64, axis_max: f64, dimension_px: f64) -> f64 {
    value / axis_max * dimension_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_inversion_is_exact() {
        for max in [1.0, 110.0, 0.3, 48000.0] {
            assert_eq!(map_vertical(max, 0.0), max);
            assert_eq!(map_vertical(max, max), 0.0);
        }
        assert_eq!(map_vertical(110.0, 45.0), 65.0);
    }

    #[test]
    fn test_horizontal_slots() {
        assert_eq!(map_horizontal_slot(0, 41.25), 0.0);
        assert_eq!(map_horizontal_slot(3, 41.25), 123.75);
    }

    #[test]
    fn test_label_offset() {
        assert_eq!(label_offset(400.0, LABEL_GUTTER_PX), -160.0);
        assert_eq!(label_offset(80.0, LABEL_GUTTER_PX), 0.0);
        assert_eq!(label_offset(400.0, 60.0), -140.0);
    }

    #[test]
    fn test_to_pixels() {
        assert_eq!(to_pixels(55.0, 110.0, 400.0), 200.0);
        assert_eq!(to_pixels(0.0, 110.0, 400.0), 0.0);
        assert_eq!(to_pixels(110.0, 110.0, 400.0), 400.0);
    }
}
