use std::path::PathBuf;
use std::sync::Arc;

use futures::FutureExt;
use futures::executor::block_on;
use futures::future::{self, BoxFuture};
use mathtree::{
    Error, ExpressionNode, ExpressionTree, FormulaRenderer, RenderConfig, RenderResult,
    RenderedFormula, TreeRenderer,
};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn quadratic_tree() -> ExpressionTree {
    let path = workspace_root()
        .join("fixtures")
        .join("trees")
        .join("quadratic.json");
    let text = std::fs::read_to_string(&path).expect("fixture");
    serde_json::from_str(&text).expect("fixture parses")
}

#[test]
fn facade_renders_a_complete_document() {
    let svg = TreeRenderer::default()
        .render_svg_blocking(&quadratic_tree(), false)
        .expect("render ok");

    let doc = roxmltree::Document::parse(&svg).expect("well-formed xml");
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.attribute("class"), Some("mainSVG"));

    let groups = doc
        .descendants()
        .filter(|n| n.is_element() && n.attribute("data-xref").is_some())
        .count();
    assert_eq!(groups, 8);

    assert!(doc.descendants().any(|n| n.has_tag_name("style")));
    assert!(doc.descendants().any(|n| n.has_tag_name("script")));
}

#[test]
fn async_and_blocking_renders_agree() {
    let renderer = TreeRenderer::default();
    let tree = quadratic_tree();

    let blocking = renderer.render_svg_blocking(&tree, true).expect("render ok");
    let awaited = block_on(renderer.render_svg(&tree, true)).expect("render ok");

    assert_eq!(blocking, awaited);
}

#[test]
fn layout_alone_positions_every_node() {
    let positioned = TreeRenderer::default()
        .layout(&quadratic_tree())
        .expect("layout ok");

    assert_eq!(positioned.len(), 8);
    assert_eq!(positioned.root().map(|n| n.id.as_str()), Some("e0"));
}

#[test]
fn empty_tree_error_surfaces_through_the_facade() {
    let result = TreeRenderer::default().render_svg_blocking(&ExpressionTree::default(), false);
    assert!(matches!(result, Err(Error::EmptyTree)));
}

#[test]
fn custom_config_flows_through() {
    let renderer = TreeRenderer::default().with_config(RenderConfig {
        document_width: 800.0,
        document_height: 400.0,
        ..RenderConfig::default()
    });

    let svg = renderer
        .render_svg_blocking(&quadratic_tree(), false)
        .expect("render ok");

    assert!(svg.contains(r#"viewBox="0 0 800 400""#));
}

#[test]
fn custom_formula_renderer_is_used_for_every_node() {
    struct MarkerRenderer;

    impl FormulaRenderer for MarkerRenderer {
        fn render<'a>(&'a self, _presentation: &'a str) -> BoxFuture<'a, RenderResult> {
            future::ready(Ok(RenderedFormula {
                svg: r#"<svg xmlns="http://www.w3.org/2000/svg"><desc>marker</desc></svg>"#
                    .to_owned(),
                width: 6.0,
                height: 3.0,
            }))
            .boxed()
        }
    }

    let renderer = TreeRenderer::new(Arc::new(MarkerRenderer));
    let tree = ExpressionTree::new(
        ExpressionNode::new("e0", "<math><mo>+</mo></math>").with_children(vec![
            ExpressionNode::new("e0.0", "<math><mi>a</mi></math>"),
            ExpressionNode::new("e0.1", "<math><mi>b</mi></math>"),
        ]),
    );

    let svg = renderer.render_svg_blocking(&tree, false).expect("render ok");

    assert_eq!(svg.matches("<desc>marker</desc>").count(), 3);
}
