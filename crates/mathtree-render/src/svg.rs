//! Composition of the final SVG document.
//!
//! The document is a single `<svg>` element carrying the stylesheet and
//! interaction script verbatim, a margin-translated wrapper group with every
//! connector path followed by every node group, and optionally the typeset
//! whole formula as an overlay layer.

use std::fmt::Write as _;

use mathtree_core::RenderConfig;

use crate::connector::connector_path_data;
use crate::model::{ConnectorInstruction, NodeInstruction};
use crate::renderer::RenderedFormula;

/// Assembles the document from layout and decoration output.
///
/// Connectors are emitted before node groups so every node paints above the
/// paths that attach to it. Node groups keep the order they are given, which
/// the pipeline arranges to be pre-order.
pub fn compose_document(
    connectors: &[ConnectorInstruction],
    nodes: &[NodeInstruction],
    whole_formula: Option<&RenderedFormula>,
    config: &RenderConfig,
) -> String {
    let mut out = String::with_capacity(4096);
    let _ = write!(
        out,
        r#"<svg width="100%" height="100%" viewBox="0 0 {} {}" class="mainSVG" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#,
        fmt(config.document_width),
        fmt(config.document_height),
    );
    out.push('\n');

    let _ = writeln!(out, "<style>{}</style>", config.stylesheet);
    let _ = writeln!(
        out,
        "<script type=\"text/javascript\">{}</script>",
        config.script
    );

    let margin = fmt(config.margin());
    let _ = write!(
        out,
        r#"<g transform="translate({margin},{margin})" class="mainWrapper">"#
    );
    out.push('\n');

    for connector in connectors {
        let _ = writeln!(
            out,
            "<path class=\"link\" d=\"{}\"/>",
            connector_path_data(connector)
        );
    }
    for node in nodes {
        render_node(&mut out, node, config);
    }
    out.push_str("</g>\n");

    if let Some(formula) = whole_formula {
        let _ = writeln!(
            out,
            "<g transform=\"translate(0,0)\" class=\"formula\">{}</g>",
            formula.svg
        );
    }

    out.push_str("</svg>");
    out
}

fn render_node(out: &mut String, node: &NodeInstruction, config: &RenderConfig) {
    let kind = if node.has_children {
        "node--internal"
    } else {
        "node--leaf"
    };
    let _ = write!(
        out,
        r#"<g class="node {kind}" transform="translate({x},{y})" data-xref="{id}">"#,
        x = fmt(node.anchor.x),
        y = fmt(node.anchor.y),
        id = escape_xml(&node.id),
    );

    // Geometry is anchored at the node center, so both the container and the
    // fragment are shifted left and up by half their own extent.
    let _ = write!(
        out,
        r#"<rect width="{w}" height="{h}" rx="{r}" ry="{r}" transform="translate({dx},{dy})"/>"#,
        w = fmt(node.width),
        h = fmt(node.height),
        r = fmt(config.corner_radius),
        dx = fmt(-node.width / 2.0),
        dy = fmt(-node.height / 2.0),
    );
    let _ = write!(
        out,
        "<g transform=\"translate({dx},{dy})\">{svg}</g>",
        dx = fmt(-node.fragment.width * config.fragment_offset),
        dy = fmt(-node.fragment.height * config.fragment_offset),
        svg = node.fragment.svg,
    );

    out.push_str("</g>\n");
}

/// Formats a coordinate the way a browser would stringify a number: integral
/// values without a fractional part, no negative zero, non-finite values
/// collapsed to zero.
pub(crate) fn fmt(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = value.round();
    let value = if (value - rounded).abs() < 1e-6 {
        rounded
    } else {
        value
    };
    if value == 0.0 {
        return "0".to_owned();
    }
    value.to_string()
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
