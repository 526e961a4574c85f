//! The formula-rendering seam.
//!
//! Converting a presentation string into display markup is delegated to a
//! [`FormulaRenderer`] so the pipeline stays independent of any particular
//! typesetter. Real deployments plug in a MathJax-style engine; tests and
//! offline tooling use [`DeterministicFormulaRenderer`].

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use serde::{Deserialize, Serialize};

use crate::svg::{escape_xml, fmt};

/// A typeset formula fragment produced by a [`FormulaRenderer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedFormula {
    /// Self-contained SVG markup for the fragment.
    pub svg: String,
    /// Intrinsic width of the fragment in pixels.
    pub width: f64,
    /// Intrinsic height of the fragment in pixels.
    pub height: f64,
}

/// Failure reported by a [`FormulaRenderer`] for one presentation string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FormulaError {
    pub message: String,
}

impl FormulaError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type RenderResult = std::result::Result<RenderedFormula, FormulaError>;

/// Renders MathML presentation markup into an SVG fragment.
///
/// Rendering is asynchronous so the pipeline can issue one request per tree
/// node and collect the results as they settle.
pub trait FormulaRenderer {
    fn render<'a>(&'a self, presentation: &'a str) -> BoxFuture<'a, RenderResult>;
}

/// Pure-Rust fallback renderer with reproducible output.
///
/// It strips the markup down to its character data and typesets that as a
/// single `<text>` run, sized from fixed per-glyph metrics. The result is not
/// pretty, but it is deterministic across platforms, which makes it the
/// default for tests and benchmarks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeterministicFormulaRenderer {
    /// Advance width per glyph in pixels. `0.0` selects the built-in default.
    pub char_width: f64,
    /// Fragment height in pixels. `0.0` selects the built-in default.
    pub line_height: f64,
}

const DEFAULT_CHAR_WIDTH: f64 = 7.2;
const DEFAULT_LINE_HEIGHT: f64 = 16.0;

impl Default for DeterministicFormulaRenderer {
    fn default() -> Self {
        Self {
            char_width: DEFAULT_CHAR_WIDTH,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }
}

impl DeterministicFormulaRenderer {
    pub fn new(char_width: f64, line_height: f64) -> Self {
        Self {
            char_width: if char_width > 0.0 {
                char_width
            } else {
                DEFAULT_CHAR_WIDTH
            },
            line_height: if line_height > 0.0 {
                line_height
            } else {
                DEFAULT_LINE_HEIGHT
            },
        }
    }

    fn render_sync(&self, presentation: &str) -> RenderedFormula {
        let text = text_content(presentation);
        let width = glyph_count(&text).max(1) as f64 * self.char_width;
        let height = self.line_height;
        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><text x="{cx}" y="{cy}" text-anchor="middle" dominant-baseline="central" font-family="serif" font-size="{fs}">{text}</text></svg>"#,
            w = fmt(width),
            h = fmt(height),
            cx = fmt(width / 2.0),
            cy = fmt(height / 2.0),
            fs = fmt(self.line_height * 0.75),
            text = escape_xml(&text),
        );
        RenderedFormula { svg, width, height }
    }
}

impl FormulaRenderer for DeterministicFormulaRenderer {
    fn render<'a>(&'a self, presentation: &'a str) -> BoxFuture<'a, RenderResult> {
        future::ready(Ok(self.render_sync(presentation))).boxed()
    }
}

/// Character data of `presentation` with tags removed and runs of whitespace
/// collapsed to single spaces.
fn text_content(presentation: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for ch in presentation.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of rendered glyphs in `text`, counting an entity reference such as
/// `&#xB1;` as one glyph. A reference with no terminating `;` ends at the next
/// whitespace, so a bare `&` cannot swallow the rest of the text.
fn glyph_count(text: &str) -> usize {
    let mut count = 0;
    let mut in_entity = false;
    for ch in text.chars() {
        match ch {
            '&' => {
                in_entity = true;
                count += 1;
            }
            ';' if in_entity => in_entity = false,
            c if in_entity && c.is_whitespace() => {
                in_entity = false;
                count += 1;
            }
            _ if in_entity => {}
            _ => count += 1,
        }
    }
    count
}
