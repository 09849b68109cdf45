//! Integration tests for the Renderer API
//!
//! These tests build nodes through the public API and check the exported SVG.

use float_cmp::assert_approx_eq;

use armillary::{
    ArmillaryError, Renderer,
    config::AppConfig,
    draw::{BoxShape, Drawable, Member, MemberEntry, Node, TabOrientation, VerticalStack},
    geometry::Size,
    metrics::MonospaceMetrics,
};

fn renderer(config: AppConfig) -> Renderer {
    Renderer::new(config).with_metrics(Box::new(MonospaceMetrics::new(5.0, 10.0)))
}

fn members(declarations: &[&str]) -> Vec<MemberEntry> {
    declarations
        .iter()
        .map(|declaration| MemberEntry::from(Member::from_declaration(declaration)))
        .collect()
}

#[test]
fn test_render_decorated_box() {
    let renderer = renderer(AppConfig::default());
    let node = renderer.decorated_box("Process order", BoxShape::Plain);

    let svg = renderer
        .render_svg(&node)
        .expect("Failed to render decorated box");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("Process order"));
}

#[test]
fn test_configured_activity_style() {
    let config = AppConfig::from_toml_str(
        r#"
        [style.activity]
        padding = 5
        minimum-width = 120
        "#,
    )
    .unwrap();
    let renderer = renderer(config);

    let node = renderer.decorated_box("Go", BoxShape::Input);
    assert_eq!(node.measure(renderer.metrics()), Size::new(130.0, 20.0));
}

#[test]
fn test_document_size_follows_content() {
    let config = AppConfig::from_toml_str("[export]\nmargin = 0\nscale = 2").unwrap();
    let renderer = renderer(config);
    let node = renderer.decorated_box("abcd", BoxShape::Plain);

    let svg = renderer.render_svg(&node).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 20 10""#));
    assert!(svg.contains(r#"width="40""#));
}

#[test]
fn test_member_area_ports() {
    let renderer = renderer(AppConfig::default());
    let area = renderer
        .member_area(members(&["alpha: int", "beta: string"]))
        .unwrap();

    let ports = area.ports(&["alpha", "beta"], renderer.metrics());
    let alpha = ports.get("alpha").unwrap();
    let beta = ports.get("beta").unwrap();
    assert_eq!(alpha.score(), 100);
    assert_approx_eq!(f32, alpha.offset(), 0.0);
    assert_approx_eq!(f32, beta.offset(), 10.0);
    assert_approx_eq!(
        f32,
        beta.offset() + beta.height(),
        area.measure(renderer.metrics()).height()
    );
}

#[test]
fn test_member_area_contract_violation() {
    let renderer = renderer(AppConfig::default());
    let entries = vec![
        MemberEntry::from(Member::from_declaration("-secret")),
        MemberEntry::from("plain note"),
    ];

    let err = renderer.member_area(entries).unwrap_err();
    assert!(matches!(err, ArmillaryError::Layout(_)));
}

#[test]
fn test_member_area_with_disabled_icons() {
    let config = AppConfig::from_toml_str("[style.members]\nattribute-icon-size = 0").unwrap();
    let renderer = renderer(config);
    let area = renderer
        .member_area(members(&["#id", "note"]))
        .unwrap();

    let svg = renderer.render_svg(&area).unwrap();
    assert!(svg.contains("#id"));
}

#[test]
fn test_linked_member_renders_anchor() {
    let renderer = renderer(AppConfig::default());
    let entries = vec![MemberEntry::from(
        Member::new("docs").with_url("https://example.com/docs"),
    )];
    let area = renderer.member_area(entries).unwrap();

    let svg = renderer.render_svg(&area).unwrap();
    assert!(svg.contains("<a"));
    assert!(svg.contains("https://example.com/docs"));
}

#[test]
fn test_tab_bar_width() {
    let renderer = renderer(AppConfig::default());
    let tabs = renderer.tab_bar(["ab", "abcd"], TabOrientation::Horizontal);
    assert_approx_eq!(f32, tabs.measure(renderer.metrics()).width(), 60.0);
}

#[test]
fn test_composed_tree() {
    let renderer = renderer(AppConfig::default());
    let stack = VerticalStack::new()
        .with_child(renderer.tab_bar(["one", "two"], TabOrientation::Horizontal))
        .with_child(renderer.decorated_box("body", BoxShape::Procedure))
        .with_child(renderer.member_area(members(&["+run()"])).unwrap());
    let root = Node::from(stack);

    let size = root.measure(renderer.metrics());
    assert_eq!(root.measure(renderer.metrics()), size);

    let svg = renderer.render_svg(&root).unwrap();
    for text in ["one", "two", "body", "run()"] {
        assert!(svg.contains(text), "missing {text}");
    }
}

#[test]
fn test_renderer_reusability() {
    let renderer = renderer(AppConfig::default());
    let first = renderer
        .render_svg(&renderer.decorated_box("first", BoxShape::Plain))
        .unwrap();
    let second = renderer
        .render_svg(&renderer.decorated_box("second", BoxShape::Output))
        .unwrap();

    assert!(first.contains("first") && !first.contains("second"));
    assert!(second.contains("second"));
}
