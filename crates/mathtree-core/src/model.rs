use serde::{Deserialize, Serialize};

/// One node of the input expression tree.
///
/// `presentation` is opaque to this workspace: it is whatever markup the
/// configured formula renderer understands, typically Presentation MathML.
/// The JSON field name `nodePresentation` matches the wire shape such trees
/// arrive in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionNode {
    /// Stable external identifier, emitted as `data-xref` on the node's SVG
    /// group so consumers can cross-reference rendered nodes.
    pub id: String,
    /// Formula markup for this node's subexpression.
    #[serde(rename = "nodePresentation")]
    pub presentation: String,
    /// Child subexpressions, in display order.
    #[serde(default)]
    pub children: Vec<ExpressionNode>,
}

impl ExpressionNode {
    pub fn new(id: impl Into<String>, presentation: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            presentation: presentation.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<ExpressionNode>) -> Self {
        self.children = children;
        self
    }
}

/// The caller-supplied document: a rooted expression tree plus an optional
/// presentation of the entire formula.
///
/// `root: None` models the empty input, which layout rejects. `formula` is
/// only consulted when a whole-formula overlay is requested; when it is
/// absent the root node's presentation is used instead (the root
/// subexpression covers the whole formula).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionTree {
    /// Presentation markup for the entire formula.
    #[serde(default)]
    pub formula: Option<String>,
    /// Root subexpression; `None` means an empty document.
    #[serde(default)]
    pub root: Option<ExpressionNode>,
}

impl ExpressionTree {
    pub fn new(root: ExpressionNode) -> Self {
        Self {
            formula: None,
            root: Some(root),
        }
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        fn count(node: &ExpressionNode) -> usize {
            1 + node.children.iter().map(count).sum::<usize>()
        }
        self.root.as_ref().map_or(0, count)
    }

    /// Presentation markup used for the whole-formula overlay.
    pub fn formula_presentation(&self) -> Option<&str> {
        self.formula
            .as_deref()
            .or_else(|| self.root.as_ref().map(|root| root.presentation.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_level_tree() -> ExpressionTree {
        ExpressionTree::new(ExpressionNode::new("e0", "<mo>+</mo>").with_children(vec![
            ExpressionNode::new("e0.0", "<mi>a</mi>"),
            ExpressionNode::new("e0.1", "<mi>b</mi>"),
        ]))
    }

    #[test]
    fn node_count_covers_every_subexpression() {
        assert_eq!(ExpressionTree::default().node_count(), 0);
        assert_eq!(two_level_tree().node_count(), 3);
    }

    #[test]
    fn formula_presentation_prefers_explicit_formula() {
        let tree = two_level_tree().with_formula("<math><mi>a</mi><mo>+</mo><mi>b</mi></math>");
        assert_eq!(
            tree.formula_presentation(),
            Some("<math><mi>a</mi><mo>+</mo><mi>b</mi></math>")
        );
    }

    #[test]
    fn formula_presentation_falls_back_to_root() {
        let tree = two_level_tree();
        assert_eq!(tree.formula_presentation(), Some("<mo>+</mo>"));
        assert_eq!(ExpressionTree::default().formula_presentation(), None);
    }
}
