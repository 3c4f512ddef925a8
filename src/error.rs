//! Error type shared by the scaler, the renderer and the CLI.

use thiserror::Error;

/// Everything that can stop a chart from being rendered.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart dataset is empty")]
    EmptyDataset,

    #[error("declared chart is null")]
    NilChart,

    #[error("axis maximum {max} must be positive and finite")]
    DegenerateRange { max: f64 },

    #[error("dimension of {dimension}px is too small for a single tick interval")]
    InvalidDimension { dimension: f64 },

    #[error("unknown chart kind {0}")]
    UnknownChartKind(u32),

    #[error("record {index} has no numeric field `{key}`")]
    MissingField { index: usize, key: String },

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("invalid chart configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("read input: {0}")]
    InputRead(std::io::Error),

    #[error("write output: {0}")]
    OutputWrite(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
