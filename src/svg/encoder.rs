//! Markup encoder - serializes a document tree to text.
//!
//! Canvases become `<svg>` elements, containers and the text nodes they hold
//! become XHTML `<div>`/`<span>` elements. Output is well-formed XML.
//! Pure string building, no DOM manipulation.

use super::styles::{fmt_num, TEXT_BASELINE_SHIFT};
use super::theme::build_style_block;
use super::types::{Canvas, Container, Document, Node, Rect, Text, TextAnchor, TextRole};

/// Color of text drawn inside the canvas
const CANVAS_TEXT_COLOR: &str = "#333333";

/// Turns a document tree into its textual form
pub trait Encoder {
    fn encode(&self, document: &Document) -> String;
}

/// SVG for the minimal layout, an XHTML fragment with embedded SVG for the composite one
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupEncoder;

impl Encoder for MarkupEncoder {
    fn encode(&self, document: &Document) -> String {
        let mut parts: Vec<String> = Vec::new();
        match &document.root {
            // Root containers carry the style block for the label classes
            Node::Container(container) => {
                parts.push(container_open_tag(container));
                parts.push(build_style_block());
                for child in &container.children {
                    encode_node(child, false, &mut parts);
                }
                parts.push("</div>".to_string());
            }
            node => encode_node(node, false, &mut parts),
        }
        parts.join("\n")
    }
}

fn encode_node(node: &Node, in_canvas: bool, parts: &mut Vec<String>) {
    match node {
        Node::Container(container) => {
            parts.push(container_open_tag(container));
            for child in &container.children {
                encode_node(child, false, parts);
            }
            parts.push("</div>".to_string());
        }
        Node::Canvas(canvas) => {
            parts.push(svg_open_tag(canvas));
            for child in &canvas.children {
                encode_node(child, true, parts);
            }
            parts.push("</svg>".to_string());
        }
        Node::Rect(rect) => parts.push(encode_rect(rect)),
        Node::Text(text) if in_canvas => parts.push(encode_svg_text(text)),
        Node::Text(text) => parts.push(encode_html_text(text)),
    }
}

// ============================================================================
// Canvas
// ============================================================================

/// Build the SVG opening tag. The view box is in canvas units and stretched
/// onto the pixel size.
fn svg_open_tag(canvas: &Canvas) -> String {
    let background = match &canvas.background {
        Some(bg) => format!(r#" style="background:{}""#, escape_xml(bg)),
        None => String::new(),
    };
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" fill="{}" preserveAspectRatio="none"{}>"#,
        fmt_num(canvas.view_box.0),
        fmt_num(canvas.view_box.1),
        fmt_num(canvas.width),
        fmt_num(canvas.height),
        escape_xml(&canvas.fill),
        background
    )
}

fn encode_rect(rect: &Rect) -> String {
    let corners = match rect.radius {
        Some(r) => format!(r#" rx="{}" ry="{}""#, fmt_num(r), fmt_num(r)),
        None => String::new(),
    };
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}"{} />"#,
        fmt_num(rect.x),
        fmt_num(rect.y),
        fmt_num(rect.width),
        fmt_num(rect.height),
        corners
    )
}

fn encode_svg_text(text: &Text) -> String {
    let transform = match text.rotation {
        Some(rotation) => format!(
            r#" transform="rotate({} {} {}) translate({} 0)""#,
            fmt_num(rotation.degrees),
            fmt_num(text.x),
            fmt_num(text.y),
            fmt_num(rotation.offset)
        ),
        None => String::new(),
    };
    format!(
        r#"<text class="{}" x="{}" y="{}" dy="{}" font-size="{}" text-anchor="{}" fill="{}"{}>{}</text>"#,
        role_class(text.role),
        fmt_num(text.x),
        fmt_num(text.y),
        TEXT_BASELINE_SHIFT,
        fmt_num(text.font_size),
        text.anchor.as_str(),
        CANVAS_TEXT_COLOR,
        transform,
        escape_xml(&text.content)
    )
}

// ============================================================================
// Layout wrappers
// ============================================================================

fn container_open_tag(container: &Container) -> String {
    let mut style = Vec::new();
    if let Some(width) = container.width {
        style.push(format!("width:{}px", fmt_num(width)));
    }
    if let Some(height) = container.height {
        style.push(format!("height:{}px", fmt_num(height)));
    }
    if style.is_empty() {
        format!(r#"<div class="{}">"#, escape_xml(&container.class))
    } else {
        format!(
            r#"<div class="{}" style="{}">"#,
            escape_xml(&container.class),
            style.join(";")
        )
    }
}

/// Absolutely positioned span; the anchor shifts it horizontally around `x`
fn encode_html_text(text: &Text) -> String {
    let shift = match text.anchor {
        TextAnchor::Start => "0",
        TextAnchor::Middle => "-50%",
        TextAnchor::End => "-100%",
    };
    let mut transform = format!("translate({},-50%)", shift);
    if let Some(rotation) = text.rotation {
        transform.push_str(&format!(
            " rotate({}deg) translateX({}px)",
            fmt_num(rotation.degrees),
            fmt_num(rotation.offset)
        ));
    }
    let class = match text.role {
        TextRole::Tick => "label",
        TextRole::Title => "label title",
    };
    format!(
        r#"<span class="{}" style="left:{}px;top:{}px;transform:{}">{}</span>"#,
        class,
        fmt_num(text.x),
        fmt_num(text.y),
        transform,
        escape_xml(&text.content)
    )
}

fn role_class(role: TextRole) -> &'static str {
    match role {
        TextRole::Tick => "tick",
        TextRole::Title => "title",
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
