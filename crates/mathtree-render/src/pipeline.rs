//! End-to-end pipeline: layout, concurrent formula rendering, composition.

use futures::FutureExt;
use futures::stream::{FuturesUnordered, StreamExt};
use mathtree_core::ExpressionTree;
use tracing::debug;

use crate::connector::connectors_for;
use crate::decorate::decorate_node;
use crate::layout::layout_tree;
use crate::model::NodeInstruction;
use crate::renderer::RenderedFormula;
use crate::svg::compose_document;
use crate::{Error, RenderOptions, Result};

enum Settled {
    Node(usize, NodeInstruction),
    WholeFormula(RenderedFormula),
}

/// Renders `tree` into a complete SVG document.
///
/// Layout runs first; on an empty tree this fails before any formula render
/// is issued. Per-node renders (plus the whole-formula render when
/// `render_formula` is set) then run concurrently. Every issued render is
/// driven to completion even after a failure, and the first failure to settle
/// is the one reported, so the result is either the full document or a single
/// error and never a partial drawing.
pub async fn render_tree(
    tree: &ExpressionTree,
    options: &RenderOptions,
    render_formula: bool,
) -> Result<String> {
    let config = &options.config;
    let positioned = layout_tree(tree, config.canvas_width(), config.canvas_height())?;

    let renderer = options.renderer.as_ref();
    let mut pending = FuturesUnordered::new();
    for (index, node) in positioned.nodes().iter().enumerate() {
        pending.push(
            async move {
                let instruction = decorate_node(node, renderer, config).await?;
                Ok(Settled::Node(index, instruction))
            }
            .boxed(),
        );
    }
    if render_formula {
        if let Some(presentation) = tree.formula_presentation() {
            pending.push(
                async move {
                    let rendered = renderer.render(presentation).await.map_err(|err| {
                        Error::WholeFormulaRender {
                            message: err.to_string(),
                        }
                    })?;
                    Ok(Settled::WholeFormula(rendered))
                }
                .boxed(),
            );
        }
    }
    debug!(nodes = positioned.len(), renders = pending.len(), "issuing formula renders");

    let mut slots: Vec<Option<NodeInstruction>> = vec![None; positioned.len()];
    let mut whole_formula = None;
    let mut first_error: Option<Error> = None;
    while let Some(settled) = pending.next().await {
        match settled {
            Ok(Settled::Node(index, instruction)) => slots[index] = Some(instruction),
            Ok(Settled::WholeFormula(rendered)) => whole_formula = Some(rendered),
            Err(err) => {
                if first_error.is_none() {
                    debug!(error = %err, "formula render failed, draining the rest");
                    first_error = Some(err);
                }
            }
        }
    }
    if let Some(err) = first_error {
        return Err(err);
    }

    let instructions: Vec<NodeInstruction> = slots.into_iter().flatten().collect();
    debug_assert_eq!(instructions.len(), positioned.len());

    let connectors = connectors_for(&positioned);
    let document = compose_document(&connectors, &instructions, whole_formula.as_ref(), config);
    debug!(bytes = document.len(), "document composed");
    Ok(document)
}
