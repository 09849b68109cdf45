//! Example: Rendering a class-like element
//!
//! Builds a title tab, a member list with visibility icons and a decorated
//! note, stacks them, and prints the resulting SVG together with the ports
//! a connector could attach to.

use armillary::{
    Renderer,
    config::AppConfig,
    draw::{BoxShape, Member, MemberEntry, Node, TabOrientation, VerticalStack},
};

const CONFIG: &str = r##"
[style.activity]
padding = [4, 8, 4, 8]
round-corner = 10
line-color = "#336699"
background-color = "#eef4fa"
maximum-width = 160

[style.members]
font-size = 12

[export]
margin = 12
metadata = "class_box example"
"##;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let renderer = Renderer::new(AppConfig::from_toml_str(CONFIG)?);

    let title = renderer.tab_bar(["Account"], TabOrientation::Horizontal);

    let entries: Vec<MemberEntry> = [
        "-id: Long",
        "-owner: String",
        "#balance: Decimal",
        "{static} +open(owner: String): Account",
        "{abstract} ~audit()",
    ]
    .into_iter()
    .map(|declaration| MemberEntry::from(Member::from_declaration(declaration)))
    .collect();
    let members = renderer.member_area(entries)?;

    let ports = members.ports(&["id", "owner", "balance"], renderer.metrics());
    for (name, port) in ports.iter() {
        eprintln!(
            "port {name}: offset {:.1}, height {:.1}, score {}",
            port.offset(),
            port.height(),
            port.score()
        );
    }

    let note = renderer.decorated_box(
        "Balances are kept in minor units and never go below zero.",
        BoxShape::Plain,
    );

    let root = Node::from(
        VerticalStack::new()
            .with_child(title)
            .with_child(members)
            .with_child(note),
    );

    println!("{}", renderer.render_svg(&root)?);
    Ok(())
}
