//! Document tree produced by the renderer and consumed by an encoder.

use serde::Serialize;

use crate::axis::ScaledAxis;
use crate::types::{ChartKind, Layout};

/// A rendered chart: the node tree plus the scales it was built from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub kind: ChartKind,
    pub layout: Layout,
    pub x_axis: ScaledAxis,
    pub y_axis: ScaledAxis,
    pub root: Node,
}

impl Document {
    /// All rectangles in document order
    pub fn rects(&self) -> Vec<&Rect> {
        let mut rects = Vec::new();
        self.root.visit(&mut |node| {
            if let Node::Rect(rect) = node {
                rects.push(rect);
            }
        });
        rects
    }

    /// All text nodes in document order
    pub fn texts(&self) -> Vec<&Text> {
        let mut texts = Vec::new();
        self.root.visit(&mut |node| {
            if let Node::Text(text) = node {
                texts.push(text);
            }
        });
        texts
    }

    /// The drawing canvas
    pub fn canvas(&self) -> Option<&Canvas> {
        let mut found = None;
        self.root.visit(&mut |node| {
            if let Node::Canvas(canvas) = node {
                found.get_or_insert(canvas);
            }
        });
        found
    }
}

/// Node variants of the document tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Container(Container),
    Canvas(Canvas),
    Rect(Rect),
    Text(Text),
}

impl Node {
    /// Depth-first, pre-order walk over this node and its descendants
    pub fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a Node)) {
        f(self);
        let children = match self {
            Node::Container(container) => &container.children,
            Node::Canvas(canvas) => &canvas.children,
            Node::Rect(_) | Node::Text(_) => return,
        };
        for child in children {
            child.visit(f);
        }
    }
}

/// Layout wrapper, sized in px when a dimension is given
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    pub class: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub children: Vec<Node>,
}

/// Graphic surface of `width x height` px showing `view_box` canvas units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// Extent in canvas units: (x axis max, y axis max)
    pub view_box: (f64, f64),
    pub fill: String,
    pub background: Option<String>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Corner radius in canvas units
    pub radius: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    Tick,
    Title,
}

/// Rotation applied to a text node, then a shift along the rotated baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rotation {
    pub degrees: f64,
    pub offset: f64,
}

/// A text node. Coordinates are canvas units inside a canvas and px elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub font_size: f64,
    pub anchor: TextAnchor,
    pub role: TextRole,
    pub rotation: Option<Rotation>,
}
