//! Chart document model, renderer and markup encoder.
//!
//! - `render` builds a [`Document`] tree from a chart
//! - [`MarkupEncoder`] serializes the tree as SVG or an XHTML fragment

mod types;
mod renderer;
mod theme;
mod styles;
mod encoder;

pub use types::*;
pub use renderer::render;
pub use theme::{is_valid_color, ChartColors, DEFAULT_FILL};
pub use styles::{fmt_num, format_tick, FontSizes};
pub use encoder::{escape_xml, Encoder, MarkupEncoder};
