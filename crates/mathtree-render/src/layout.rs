//! Tidy-tree layout on a fixed canvas.
//!
//! Rows are spaced evenly over the canvas height, one per depth level. Leaves
//! are spread evenly over the canvas width in left-to-right order, and every
//! internal node sits at the mean of its children's horizontal positions, so
//! sibling subtrees never overlap and the drawing always fills the canvas.

use mathtree_core::{ExpressionNode, ExpressionTree};

use crate::model::{PositionedNode, PositionedTree};
use crate::{Error, Result};

/// Lays out `tree` on a `canvas_width` by `canvas_height` canvas.
///
/// Returns [`Error::EmptyTree`] when the tree has no root.
pub fn layout_tree(tree: &ExpressionTree, canvas_width: f64, canvas_height: f64) -> Result<PositionedTree> {
    let Some(root) = tree.root.as_ref() else {
        return Err(Error::EmptyTree);
    };

    let mut nodes = Vec::with_capacity(tree.node_count());
    push_subtree(root, None, 0, &mut nodes);

    let max_depth = nodes.iter().map(|n| n.depth).max().unwrap_or(0);
    let leaf_count = nodes.iter().filter(|n| n.children.is_empty()).count();

    let level_height = canvas_height / max_depth.max(1) as f64;
    let leaf_slot = canvas_width / leaf_count as f64;

    // Forward pass: rows from depth, leaf columns in pre-order (which visits
    // leaves left to right).
    let mut next_leaf = 0usize;
    for node in &mut nodes {
        node.y = node.depth as f64 * level_height;
        if node.children.is_empty() {
            node.x = (next_leaf as f64 + 0.5) * leaf_slot;
            next_leaf += 1;
        }
    }

    // Backward pass: children precede nothing in pre-order, so walking the
    // arena in reverse sees every child before its parent.
    for i in (0..nodes.len()).rev() {
        if nodes[i].children.is_empty() {
            continue;
        }
        let sum: f64 = nodes[i].children.iter().map(|&c| nodes[c].x).sum();
        nodes[i].x = sum / nodes[i].children.len() as f64;
    }

    Ok(PositionedTree::from_nodes(nodes))
}

fn push_subtree(
    node: &ExpressionNode,
    parent: Option<usize>,
    depth: usize,
    nodes: &mut Vec<PositionedNode>,
) -> usize {
    let index = nodes.len();
    nodes.push(PositionedNode {
        id: node.id.clone(),
        presentation: node.presentation.clone(),
        x: 0.0,
        y: 0.0,
        depth,
        parent,
        children: Vec::with_capacity(node.children.len()),
    });
    for child in &node.children {
        let child_index = push_subtree(child, Some(index), depth + 1, nodes);
        nodes[index].children.push(child_index);
    }
    index
}
