//! Per-node decoration: typeset the formula fragment and size the container.

use mathtree_core::RenderConfig;

use crate::model::{NodeInstruction, PositionedNode};
use crate::renderer::FormulaRenderer;
use crate::{Error, Result};

/// Container extent for a fragment with the given intrinsic size: the
/// intrinsic dimension scaled up, clamped below by the minimum node size.
pub fn container_size(
    intrinsic_width: f64,
    intrinsic_height: f64,
    config: &RenderConfig,
) -> (f64, f64) {
    (
        (intrinsic_width * config.formula_scale).max(config.min_node_size),
        (intrinsic_height * config.formula_scale).max(config.min_node_size),
    )
}

/// Renders `node`'s presentation and derives its container geometry.
///
/// A renderer failure is tagged with the node id so callers can report which
/// subexpression broke. The renderer carries the auto traits so the returned
/// future stays `Send` and can be driven by any executor.
pub async fn decorate_node(
    node: &PositionedNode,
    renderer: &(dyn FormulaRenderer + Send + Sync),
    config: &RenderConfig,
) -> Result<NodeInstruction> {
    let fragment = renderer
        .render(&node.presentation)
        .await
        .map_err(|err| Error::FormulaRender {
            node_id: node.id.clone(),
            message: err.to_string(),
        })?;

    let (width, height) = container_size(fragment.width, fragment.height, config);
    Ok(NodeInstruction {
        id: node.id.clone(),
        anchor: node.anchor(),
        width,
        height,
        has_children: !node.children.is_empty(),
        fragment,
    })
}
