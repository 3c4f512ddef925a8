//! Type definitions for chart configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{ChartError, Result};

/// One row of the dataset: field name to value
pub type Record = HashMap<String, f64>;

/// The kind of chart to draw.
///
/// The numeric codes are the ones accepted in the `graph_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar = 1,
    Line = 2,
    Scatter = 3,
}

impl ChartKind {
    /// Multiplier applied to the largest value before the vertical axis is rounded
    pub fn margin_factor(self) -> f64 {
        match self {
            ChartKind::Bar => 1.15,
            ChartKind::Line | ChartKind::Scatter => 1.2,
        }
    }
}

impl TryFrom<u32> for ChartKind {
    type Error = ChartError;

    fn try_from(code: u32) -> Result<Self> {
        match code {
            1 => Ok(ChartKind::Bar),
            2 => Ok(ChartKind::Line),
            3 => Ok(ChartKind::Scatter),
            other => Err(ChartError::UnknownChartKind(other)),
        }
    }
}

/// How the rendered document is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// A single SVG canvas with tick labels drawn inside it
    #[default]
    Minimal,
    /// Canvas wrapped in an HTML fragment with a label column and a label row
    Composite,
}

/// One axis of the chart as configured by the caller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisSpec {
    /// Field of each record this axis reads
    pub key: String,
    /// Axis title (drawn when `settings.labels` is on)
    #[serde(default)]
    pub label: String,
    /// Unit appended to tick labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl AxisSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            unit: None,
        }
    }
}

/// Optional display flags
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Draw axis titles
    pub labels: bool,
    /// Bar fill color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Canvas background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Bar corner radius in px
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    pub layout: Layout,
}

/// The root chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Raw chart kind code, resolved with [`Chart::kind`]
    #[serde(rename = "graph_type")]
    pub kind: u32,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    /// Dimensions in px
    pub width: u32,
    pub height: u32,
    #[serde(default, alias = "DataSet")]
    pub dataset: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<RenderSettings>,
}

impl Chart {
    pub fn new(kind: ChartKind, x_axis: AxisSpec, y_axis: AxisSpec, width: u32, height: u32) -> Self {
        Self {
            kind: kind as u32,
            x_axis,
            y_axis,
            width,
            height,
            dataset: Vec::new(),
            settings: None,
        }
    }

    /// Resolve the raw kind code
    pub fn kind(&self) -> Result<ChartKind> {
        ChartKind::try_from(self.kind)
    }

    /// Layout requested by the settings, minimal when no settings are given
    pub fn layout(&self) -> Layout {
        self.settings.as_ref().map(|s| s.layout).unwrap_or_default()
    }

    /// Collect the values of `key` in dataset order
    pub fn column(&self, key: &str) -> Result<Vec<f64>> {
        self.dataset
            .iter()
            .enumerate()
            .map(|(index, record)| {
                record.get(key).copied().ok_or_else(|| ChartError::MissingField {
                    index,
                    key: key.to_string(),
                })
            })
            .collect()
    }
}
