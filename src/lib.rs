//! chart2svg - Render small tabular datasets as SVG charts
//!
//! This library scales the axes of a chart from its dataset, maps every record
//! into rendering space and assembles a document tree that is encoded as SVG,
//! or as an XHTML fragment with the SVG canvas inside axis-label wrappers.
//!
//! # Example
//!
//! ```rust
//! let config = r#"{
//!     "graph_type": 1,
//!     "x_axis": {"key": "day", "label": "Day"},
//!     "y_axis": {"key": "visits", "label": "Visits"},
//!     "width": 600,
//!     "height": 400,
//!     "dataset": [{"day": 1, "visits": 10}, {"day": 2, "visits": 45}, {"day": 3, "visits": 90}]
//! }"#;
//!
//! let svg = chart2svg::render_json(config).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Supported Chart Kinds
//!
//! - Bar (`graph_type` 1)
//! - Line (`graph_type` 2), axes only
//! - Scatter (`graph_type` 3), axes only

pub mod types;
pub mod error;
pub mod axis;
pub mod mapper;
pub mod svg;

pub use axis::{compute_axis, compute_category_axis, ScaledAxis};
pub use error::{ChartError, Result};
pub use svg::{render, Document, Encoder, MarkupEncoder};
pub use types::*;

/// Render a chart and encode it with the markup encoder.
///
/// # Example
/// ```rust
/// use chart2svg::{AxisSpec, Chart, ChartKind, Record};
///
/// let mut chart = Chart::new(ChartKind::Bar, AxisSpec::new("x", "X"), AxisSpec::new("y", "Y"), 300, 200);
/// chart.dataset.push(Record::from([("x".to_string(), 0.0), ("y".to_string(), 4.0)]));
/// let svg = chart2svg::render_to_string(&chart).unwrap();
/// assert!(svg.contains("<rect"));
/// ```
pub fn render_to_string(chart: &Chart) -> Result<String> {
    let document = render(chart)?;
    Ok(MarkupEncoder.encode(&document))
}

/// Parse a JSON chart configuration.
///
/// A JSON `null` is reported as [`ChartError::NilChart`].
pub fn parse_chart(input: &str) -> Result<Chart> {
    let chart: Option<Chart> = serde_json::from_str(input)?;
    chart.ok_or(ChartError::NilChart)
}

/// Parse a JSON chart configuration and render it to markup.
pub fn render_json(input: &str) -> Result<String> {
    render_to_string(&parse_chart(input)?)
}
