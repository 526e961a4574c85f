//! Cubic connector paths between parents and children.

use crate::model::{ConnectorInstruction, PositionedTree};
use crate::svg::fmt;

/// One connector per non-root node, from the child anchor up to its parent,
/// in pre-order of the child.
pub fn connectors_for(tree: &PositionedTree) -> Vec<ConnectorInstruction> {
    tree.nodes()
        .iter()
        .enumerate()
        .filter_map(|(index, node)| {
            let parent = tree.parent_of(index)?;
            Some(ConnectorInstruction {
                from: node.anchor(),
                to: parent.anchor(),
            })
        })
        .collect()
}

/// Path data for an elbow connector: a cubic Bezier whose control points sit
/// at the vertical midpoint between the endpoints, so the curve leaves and
/// enters vertically.
pub fn connector_path_data(connector: &ConnectorInstruction) -> String {
    let mid_y = (connector.from.y + connector.to.y) / 2.0;
    format!(
        "M{},{}C{},{} {},{} {},{}",
        fmt(connector.from.x),
        fmt(connector.from.y),
        fmt(connector.from.x),
        fmt(mid_y),
        fmt(connector.to.x),
        fmt(mid_y),
        fmt(connector.to.x),
        fmt(connector.to.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout_tree;
    use crate::model::Point;
    use mathtree_core::{ExpressionNode, ExpressionTree};

    #[test]
    fn every_non_root_node_gets_one_connector() {
        let tree = ExpressionTree::new(
            ExpressionNode::new("e0", "<math><mo>=</mo></math>").with_children(vec![
                ExpressionNode::new("e0.0", "<math><mi>x</mi></math>"),
                ExpressionNode::new("e0.1", "<math><mo>+</mo></math>").with_children(vec![
                    ExpressionNode::new("e0.1.0", "<math><mi>a</mi></math>"),
                    ExpressionNode::new("e0.1.1", "<math><mi>b</mi></math>"),
                ]),
            ]),
        );
        let positioned = layout_tree(&tree, 600.0, 500.0).unwrap();
        let connectors = connectors_for(&positioned);

        assert_eq!(connectors.len(), positioned.len() - 1);
        for (connector, node) in connectors.iter().zip(&positioned.nodes()[1..]) {
            assert_eq!(connector.from, node.anchor());
        }
    }

    #[test]
    fn single_node_tree_has_no_connectors() {
        let tree = ExpressionTree::new(ExpressionNode::new("e0", "<math><mi>x</mi></math>"));
        let positioned = layout_tree(&tree, 600.0, 500.0).unwrap();
        assert!(connectors_for(&positioned).is_empty());
    }

    #[test]
    fn path_control_points_sit_at_the_vertical_midpoint() {
        let connector = ConnectorInstruction {
            from: Point::new(100.0, 250.0),
            to: Point::new(300.0, 0.0),
        };
        assert_eq!(
            connector_path_data(&connector),
            "M100,250C100,125 300,125 300,0"
        );
    }

    #[test]
    fn fractional_anchors_keep_their_precision() {
        let connector = ConnectorInstruction {
            from: Point::new(104.33333333333333, 172.0),
            to: Point::new(156.5, 86.0),
        };
        assert_eq!(
            connector_path_data(&connector),
            "M104.33333333333333,172C104.33333333333333,129 156.5,129 156.5,86"
        );
    }
}
