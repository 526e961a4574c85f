//! Intermediate geometry produced between layout and SVG composition.

use serde::{Deserialize, Serialize};

use crate::renderer::RenderedFormula;

/// A point on the layout canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One expression node with its anchor assigned by layout.
///
/// Children and parent are indices into the owning [`PositionedTree`], which
/// stores nodes in pre-order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    pub id: String,
    pub presentation: String,
    pub x: f64,
    pub y: f64,
    pub depth: usize,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

impl PositionedNode {
    /// Anchor the node's container is centered on.
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The laid-out tree: every node with an anchor, stored in pre-order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedTree {
    nodes: Vec<PositionedNode>,
}

impl PositionedTree {
    pub(crate) fn from_nodes(nodes: Vec<PositionedNode>) -> Self {
        Self { nodes }
    }

    /// Nodes in pre-order; index 0 is the root.
    pub fn nodes(&self) -> &[PositionedNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<&PositionedNode> {
        self.nodes.first()
    }

    pub fn parent_of(&self, index: usize) -> Option<&PositionedNode> {
        self.nodes.get(index)?.parent.map(|p| &self.nodes[p])
    }
}

/// Everything needed to draw one node group: geometry plus the typeset
/// formula fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInstruction {
    pub id: String,
    pub anchor: Point,
    /// Container width after scaling and clamping.
    pub width: f64,
    /// Container height after scaling and clamping.
    pub height: f64,
    pub has_children: bool,
    pub fragment: RenderedFormula,
}

/// A parent/child connector, drawn from the child anchor to the parent anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectorInstruction {
    pub from: Point,
    pub to: Point,
}
