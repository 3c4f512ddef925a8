//! Document renderer - turns a chart configuration into a document tree.
//!
//! Scales both axes, walks the dataset once to emit one primitive per record,
//! then wraps the canvas according to the requested layout.

use log::{debug, trace};

use super::styles::{format_tick, FontSizes, Spacing};
use super::theme::ChartColors;
use super::types::{
    Canvas, Container, Document, Node, Rect, Rotation, Text, TextAnchor, TextRole,
};
use crate::axis::{compute_axis, compute_category_axis, ScaledAxis};
use crate::error::{ChartError, Result};
use crate::mapper::{label_offset, map_horizontal_slot, map_vertical, to_pixels, LABEL_GUTTER_PX};
use crate::types::{AxisSpec, Chart, ChartKind, Layout};

/// Width of the label column left of the canvas in the composite layout (in px)
const COLUMN_WIDTH: f64 = LABEL_GUTTER_PX * 2.0;

/// Render a chart into a document tree.
///
/// The chart is only read. Scales are returned inside the [`Document`].
pub fn render(chart: &Chart) -> Result<Document> {
    let kind = chart.kind()?;
    if chart.dataset.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    let settings = chart.settings.clone().unwrap_or_default();
    let colors = ChartColors::from_settings(&settings)?;

    let width = chart.width as f64;
    let height = chart.height as f64;
    if chart.width == 0 {
        return Err(ChartError::InvalidDimension { dimension: width });
    }

    let values = chart.column(&chart.y_axis.key)?;
    let y_axis = compute_axis(&values, height, kind.margin_factor())?;
    // Horizontal extent follows the aspect ratio, not the x values
    let x_axis = compute_category_axis(values.len(), width / height * y_axis.max)?;

    // Canvas units per pixel, equal on both axes
    let units_per_px = y_axis.max / height;

    let geometry = match kind {
        ChartKind::Bar => {
            let radius = settings
                .radius
                .filter(|r| r.is_finite() && *r > 0.0)
                .map(|r| r * units_per_px);
            bar_geometry(&values, &x_axis, &y_axis, radius)
        }
        ChartKind::Line | ChartKind::Scatter => {
            debug!("{:?} charts have no geometry, rendering axes only", kind);
            Vec::new()
        }
    };

    let canvas = Canvas {
        width,
        height,
        view_box: (x_axis.max, y_axis.max),
        fill: colors.fill,
        background: colors.background,
        children: geometry,
    };

    let root = match settings.layout {
        Layout::Minimal => {
            minimal_layout(chart, canvas, &x_axis, &y_axis, units_per_px, settings.labels)
        }
        Layout::Composite => composite_layout(chart, canvas, &x_axis, &y_axis, settings.labels),
    };

    debug!(
        "rendered {:?} chart ({:?}) with {} records",
        kind,
        settings.layout,
        chart.dataset.len()
    );

    Ok(Document {
        kind,
        layout: settings.layout,
        x_axis,
        y_axis,
        root,
    })
}

// ============================================================================
// Geometry
// ============================================================================

fn bar_geometry(values: &[f64], x_axis: &ScaledAxis, y_axis: &ScaledAxis, radius: Option<f64>) -> Vec<Node> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            // Negative values collapse to an empty bar on the baseline
            let value = value.max(0.0);
            let rect = Rect {
                x: map_horizontal_slot(index, x_axis.increment),
                y: map_vertical(y_axis.max, value),
                width: x_axis.increment,
                height: value,
                radius,
            };
            trace!("bar {}: {:?}", index, rect);
            Node::Rect(rect)
        })
        .collect()
}

// ============================================================================
// Layouts
// ============================================================================

/// Canvas only, with tick labels and titles drawn in canvas units
fn minimal_layout(
    chart: &Chart,
    mut canvas: Canvas,
    x_axis: &ScaledAxis,
    y_axis: &ScaledAxis,
    units_per_px: f64,
    titles: bool,
) -> Node {
    let font_size = FontSizes::TICK_LABEL * units_per_px;
    let pad = Spacing::TICK_PAD * units_per_px;

    for &value in &y_axis.labels {
        canvas.children.push(tick(
            pad,
            map_vertical(y_axis.max, value),
            value,
            &chart.y_axis,
            font_size,
            TextAnchor::Start,
        ));
    }
    for &value in &x_axis.labels {
        canvas.children.push(tick(
            value,
            y_axis.max - pad,
            value,
            &chart.x_axis,
            font_size,
            TextAnchor::Middle,
        ));
    }

    if titles {
        let title_size = FontSizes::AXIS_TITLE * units_per_px;
        // Rotated about its own anchor, which already sits mid-axis
        canvas.children.push(Node::Text(Text {
            x: LABEL_GUTTER_PX * units_per_px,
            y: y_axis.max / 2.0,
            content: chart.y_axis.label.clone(),
            font_size: title_size,
            anchor: TextAnchor::Middle,
            role: TextRole::Title,
            rotation: Some(Rotation {
                degrees: -90.0,
                offset: 0.0,
            }),
        }));
        canvas.children.push(Node::Text(Text {
            x: x_axis.max / 2.0,
            y: y_axis.max - pad - 2.0 * font_size,
            content: chart.x_axis.label.clone(),
            font_size: title_size,
            anchor: TextAnchor::Middle,
            role: TextRole::Title,
            rotation: None,
        }));
    }

    Node::Canvas(canvas)
}

/// Label column, canvas and label row inside a wrapping container.
///
/// Labels outside the canvas are positioned in px.
fn composite_layout(
    chart: &Chart,
    canvas: Canvas,
    x_axis: &ScaledAxis,
    y_axis: &ScaledAxis,
    titles: bool,
) -> Node {
    let width = canvas.width;
    let height = canvas.height;

    let mut column = Vec::new();
    if titles {
        column.push(Node::Text(Text {
            x: 0.0,
            y: height / 2.0,
            content: chart.y_axis.label.clone(),
            font_size: FontSizes::AXIS_TITLE,
            anchor: TextAnchor::Middle,
            role: TextRole::Title,
            rotation: Some(Rotation {
                degrees: -90.0,
                offset: label_offset(height, LABEL_GUTTER_PX),
            }),
        }));
    }
    for &value in &y_axis.labels {
        let y = to_pixels(map_vertical(y_axis.max, value), y_axis.max, height);
        column.push(tick(
            COLUMN_WIDTH - Spacing::TICK_PAD,
            y,
            value,
            &chart.y_axis,
            FontSizes::TICK_LABEL,
            TextAnchor::End,
        ));
    }

    let mut row = Vec::new();
    for &value in &x_axis.labels {
        row.push(tick(
            to_pixels(value, x_axis.max, width),
            Spacing::TICK_PAD,
            value,
            &chart.x_axis,
            FontSizes::TICK_LABEL,
            TextAnchor::Middle,
        ));
    }
    if titles {
        row.push(Node::Text(Text {
            x: width / 2.0,
            y: Spacing::TITLE_ROW_Y,
            content: chart.x_axis.label.clone(),
            font_size: FontSizes::AXIS_TITLE,
            anchor: TextAnchor::Middle,
            role: TextRole::Title,
            rotation: None,
        }));
    }

    Node::Container(Container {
        class: "chart".to_string(),
        width: None,
        height: None,
        children: vec![
            Node::Container(Container {
                class: "axis-column".to_string(),
                width: Some(COLUMN_WIDTH),
                height: Some(height),
                children: column,
            }),
            Node::Canvas(canvas),
            Node::Container(Container {
                class: "axis-row".to_string(),
                width: Some(width),
                height: Some(Spacing::ROW_HEIGHT),
                children: row,
            }),
        ],
    })
}

fn tick(x: f64, y: f64, value: f64, axis: &AxisSpec, font_size: f64, anchor: TextAnchor) -> Node {
    Node::Text(Text {
        x,
        y,
        content: format_tick(value, axis.unit.as_deref()),
        font_size,
        anchor,
        role: TextRole::Tick,
        rotation: None,
    })
}
