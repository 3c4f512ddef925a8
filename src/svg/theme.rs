//! Chart colors and the composite layout style block.
//!
//! Colors come from the chart settings and end up in SVG attributes, so they are
//! checked against the CSS color forms the encoder accepts.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use super::styles::FontSizes;
use crate::error::{ChartError, Result};
use crate::types::RenderSettings;

/// Bar fill used when the settings name none
pub const DEFAULT_FILL: &str = "red";

lazy_static! {
    static ref RE_HEX_COLOR: Regex =
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap();
    static ref RE_FUNC_COLOR: Regex =
        Regex::new(r"^(?:rgb|rgba|hsl|hsla)\(\s*[-0-9.%,\s/a-z]+\)$").unwrap();
    static ref NAMED_COLORS: HashSet<&'static str> = CSS_COLOR_NAMES.iter().copied().collect();
}

/// CSS color keywords
const CSS_COLOR_NAMES: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque",
    "black", "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue",
    "chartreuse", "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson",
    "cyan", "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen",
    "darkgrey", "darkkhaki", "darkmagenta", "darkolivegreen", "darkorange",
    "darkorchid", "darkred", "darksalmon", "darkseagreen", "darkslateblue",
    "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite",
    "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray",
    "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon",
    "lightblue", "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray",
    "lightgreen", "lightgrey", "lightpink", "lightsalmon", "lightseagreen",
    "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon",
    "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen",
    "mediumslateblue", "mediumspringgreen", "mediumturquoise", "mediumvioletred",
    "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite", "navy",
    "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru",
    "pink", "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown",
    "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell",
    "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "turquoise",
    "violet", "wheat", "white", "whitesmoke", "yellow", "yellowgreen", "transparent",
    "currentcolor",
];

/// Resolved chart colors
#[derive(Debug, Clone, PartialEq)]
pub struct ChartColors {
    pub fill: String,
    pub background: Option<String>,
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL.to_string(),
            background: None,
        }
    }
}

impl ChartColors {
    /// Take the colors from the settings, falling back to the defaults
    pub fn from_settings(settings: &RenderSettings) -> Result<Self> {
        let fill = match &settings.fill {
            Some(fill) => validate_color(fill)?,
            None => DEFAULT_FILL.to_string(),
        };
        let background = settings
            .background
            .as_deref()
            .map(validate_color)
            .transpose()?;
        Ok(Self { fill, background })
    }
}

/// Accept hex, rgb()/hsl() and CSS color keywords
pub fn is_valid_color(color: &str) -> bool {
    RE_HEX_COLOR.is_match(color)
        || RE_FUNC_COLOR.is_match(color)
        || NAMED_COLORS.contains(color.to_ascii_lowercase().as_str())
}

fn validate_color(color: &str) -> Result<String> {
    let color = color.trim();
    if is_valid_color(color) {
        Ok(color.to_string())
    } else {
        Err(ChartError::InvalidColor(color.to_string()))
    }
}

/// Build the <style> block for the composite layout.
pub fn build_style_block() -> String {
    format!(
        r#"<style>
  .chart {{ display: grid; grid-template-columns: auto auto; font-family: system-ui, sans-serif; }}
  .axis-column, .axis-row {{ position: relative; }}
  .axis-row {{ grid-column: 2; }}
  .label {{ position: absolute; white-space: nowrap; font-size: {}px; line-height: 1; }}
  .title {{ font-size: {}px; font-weight: 600; }}
</style>"#,
        FontSizes::TICK_LABEL,
        FontSizes::AXIS_TITLE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_forms() {
        for color in ["red", "RebeccaPurple", "currentColor", "#fff", "#336699", "#33669980", "rgb(10, 20, 30)", "hsla(120, 50%, 50%, 0.3)"] {
            assert!(is_valid_color(color), "{} should be accepted", color);
        }
        for color in ["", "#12", "red\" onload=\"x", "url(#x)", "#ggg", "notacolor", "redd"] {
            assert!(!is_valid_color(color), "{} should be rejected", color);
        }
    }

    #[test]
    fn test_colors_from_settings() {
        let colors = ChartColors::from_settings(&RenderSettings::default()).unwrap();
        assert_eq!(colors, ChartColors::default());

        let settings = RenderSettings {
            fill: Some(" #336699 ".to_string()),
            background: Some("white".to_string()),
            ..Default::default()
        };
        let colors = ChartColors::from_settings(&settings).unwrap();
        assert_eq!(colors.fill, "#336699");
        assert_eq!(colors.background.as_deref(), Some("white"));

        let settings = RenderSettings {
            background: Some("<script>".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            ChartColors::from_settings(&settings),
            Err(ChartError::InvalidColor(_))
        ));
    }
}
