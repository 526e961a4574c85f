#![forbid(unsafe_code)]

//! Layout and SVG composition for mathtree expression-tree diagrams.
//!
//! [`render_tree`] is the whole pipeline: tidy-tree layout on the fixed
//! canvas, one concurrent formula render per node through the configured
//! [`FormulaRenderer`], then composition of connectors, node groups and the
//! optional whole-formula overlay into a single self-contained `<svg>`
//! document. The stages are public so callers can run layout alone or feed
//! their own instructions into [`compose_document`].

pub mod connector;
pub mod decorate;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod renderer;
pub mod svg;

pub use connector::{connector_path_data, connectors_for};
pub use decorate::{container_size, decorate_node};
pub use layout::layout_tree;
pub use model::{ConnectorInstruction, NodeInstruction, Point, PositionedNode, PositionedTree};
pub use pipeline::render_tree;
pub use renderer::{
    DeterministicFormulaRenderer, FormulaError, FormulaRenderer, RenderResult, RenderedFormula,
};
pub use svg::compose_document;

use mathtree_core::RenderConfig;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot lay out an empty expression tree")]
    EmptyTree,
    #[error("formula rendering failed for node `{node_id}`: {message}")]
    FormulaRender { node_id: String, message: String },
    #[error("whole-formula rendering failed: {message}")]
    WholeFormulaRender { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone)]
pub struct RenderOptions {
    pub renderer: Arc<dyn FormulaRenderer + Send + Sync>,
    pub config: RenderConfig,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            renderer: Arc::new(DeterministicFormulaRenderer::default()),
            config: RenderConfig::default(),
        }
    }
}
