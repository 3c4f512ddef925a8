//! Font sizes, spacing constants and number formatting.

/// Fixed font sizes used in the renderer (in px)
pub struct FontSizes;

impl FontSizes {
    pub const TICK_LABEL: f64 = 12.0;
    pub const AXIS_TITLE: f64 = 13.0;
}

/// Spacing around the canvas in the composite layout (in px)
pub struct Spacing;

impl Spacing {
    /// Gap between a tick label and the canvas edge
    pub const TICK_PAD: f64 = 6.0;
    /// Height of the label row under the canvas
    pub const ROW_HEIGHT: f64 = 40.0;
    /// Vertical position of the horizontal axis title inside the label row
    pub const TITLE_ROW_Y: f64 = 22.0;
}

/// Vertical shift applied to canvas text for font-agnostic centering.
pub const TEXT_BASELINE_SHIFT: &str = "0.35em";

/// Format a number for an attribute value: at most three decimals, no trailing zeros
pub fn fmt_num(n: f64) -> String {
    trim_decimals(format!("{:.3}", n))
}

/// Format a tick value for display, with the axis unit appended when present
pub fn format_tick(value: f64, unit: Option<&str>) -> String {
    let number = trim_decimals(format!("{:.2}", value));
    match unit {
        Some(unit) if !unit.is_empty() => format!("{} {}", number, unit),
        _ => number,
    }
}

fn trim_decimals(s: String) -> String {
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    // Rounding can leave "-0"
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
