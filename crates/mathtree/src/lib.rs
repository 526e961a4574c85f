#![forbid(unsafe_code)]

//! `mathtree` renders MathML expression trees as interactive SVG diagrams,
//! headlessly and without a browser.
//!
//! A tree of subexpressions (each node carrying presentation markup) goes in,
//! one self-contained `<svg>` document comes out: tidy-tree layout, a rounded
//! container per node with the typeset formula inside, cubic connectors
//! between parents and children, and an embedded stylesheet and interaction
//! script. Typesetting itself is pluggable through [`FormulaRenderer`];
//! the built-in [`DeterministicFormulaRenderer`] needs no external engine.
//!
//! ```
//! use mathtree::{ExpressionNode, ExpressionTree, TreeRenderer};
//!
//! let tree = ExpressionTree::new(
//!     ExpressionNode::new("e0", "<math><mo>+</mo></math>").with_children(vec![
//!         ExpressionNode::new("e0.0", "<math><mi>a</mi></math>"),
//!         ExpressionNode::new("e0.1", "<math><mi>b</mi></math>"),
//!     ]),
//! );
//!
//! let svg = TreeRenderer::default().render_svg_blocking(&tree, false)?;
//! assert!(svg.starts_with("<svg "));
//! assert!(svg.contains("data-xref=\"e0.1\""));
//! # Ok::<(), mathtree::Error>(())
//! ```

pub use mathtree_core::*;

pub use mathtree_render::{
    ConnectorInstruction, DeterministicFormulaRenderer, Error, FormulaError, FormulaRenderer,
    NodeInstruction, Point, PositionedNode, PositionedTree, RenderOptions, RenderResult,
    RenderedFormula, Result, compose_document, connector_path_data, connectors_for,
    container_size, layout_tree, render_tree,
};

use std::sync::Arc;

/// Reusable bundle of a formula renderer and render configuration.
#[derive(Clone)]
pub struct TreeRenderer {
    pub renderer: Arc<dyn FormulaRenderer + Send + Sync>,
    pub config: RenderConfig,
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self {
            renderer: Arc::new(DeterministicFormulaRenderer::default()),
            config: RenderConfig::default(),
        }
    }
}

impl TreeRenderer {
    pub fn new(renderer: Arc<dyn FormulaRenderer + Send + Sync>) -> Self {
        Self {
            renderer,
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    fn options(&self) -> RenderOptions {
        RenderOptions {
            renderer: Arc::clone(&self.renderer),
            config: self.config.clone(),
        }
    }

    /// Renders `tree` into a complete SVG document.
    ///
    /// With `render_formula` set, the whole formula is typeset as an extra
    /// overlay layer on top of the diagram.
    pub async fn render_svg(&self, tree: &ExpressionTree, render_formula: bool) -> Result<String> {
        render_tree(tree, &self.options(), render_formula).await
    }

    /// Synchronous render helper; drives [`render_svg`](Self::render_svg) to
    /// completion on `futures::executor::block_on`.
    pub fn render_svg_blocking(
        &self,
        tree: &ExpressionTree,
        render_formula: bool,
    ) -> Result<String> {
        futures::executor::block_on(self.render_svg(tree, render_formula))
    }

    /// Runs layout alone, without typesetting anything.
    pub fn layout(&self, tree: &ExpressionTree) -> Result<PositionedTree> {
        layout_tree(tree, self.config.canvas_width(), self.config.canvas_height())
    }
}
