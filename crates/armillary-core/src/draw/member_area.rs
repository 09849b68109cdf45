//! Member lists of class-like elements.

use log::debug;

use crate::{
    draw::{
        DrawContext, Drawable, FontConfiguration, LayoutGroup, MemberEntry, PlacementStrategy,
        Ports, TextAtom, VerticalStack, VisibilityIcon, elect, sort_short_names, split_lines,
    },
    error::LayoutError,
    geometry::{Bounds, Point, Size, Translation},
    metrics::TextMetrics,
    style::{HorizontalAlignment, Style},
};

/// Extra width of the icon lane beyond the circled-character radius.
const ICON_LANE_GAP: f32 = 3.0;

/// The text block of one entry.
#[derive(Debug)]
struct EntryBlock {
    lines: VerticalStack,
    /// Member display text without its visibility marker; `None` for plain text.
    lookup: Option<String>,
    url: Option<String>,
}

impl Drawable for EntryBlock {
    fn measure(&self, metrics: &dyn TextMetrics) -> Size {
        self.lines.measure(metrics)
    }

    fn draw(&self, ctx: &DrawContext) {
        match &self.url {
            Some(url) => ctx.with_link(url, |ctx| self.lines.draw(ctx)),
            None => self.lines.draw(ctx),
        }
    }

    fn inner_position(&self, query: &str, metrics: &dyn TextMetrics) -> Option<Bounds> {
        self.lookup
            .as_deref()
            .is_some_and(|lookup| lookup.starts_with(query))
            .then(|| Point::default().to_bounds(self.measure(metrics)))
    }
}

#[derive(Debug)]
struct Row {
    icon: Option<VisibilityIcon>,
    block: EntryBlock,
    search_text: String,
}

/// An ordered list of members, optionally with visibility icons, followed by
/// embedded blocks.
///
/// When icons are enabled (a nonzero attribute icon size) and at least one
/// member carries a visibility marker, a leading lane
/// `circled_character_radius + 3` wide holds one icon per row and the marker
/// characters are dropped from the text. Otherwise markers stay in the text
/// literally.
///
/// Abstract members are set in italics and static members underlined.
///
/// # Examples
///
/// ```
/// # use armillary_core::draw::{Drawable, Member, MemberArea, MemberEntry};
/// # use armillary_core::metrics::MonospaceMetrics;
/// # use armillary_core::style::Style;
/// # fn main() -> Result<(), armillary_core::error::LayoutError> {
/// let entries = vec![
///     MemberEntry::from(Member::new("alpha: int")),
///     MemberEntry::from(Member::new("beta: string")),
/// ];
/// let area = MemberArea::new(entries, &Style::new())?;
///
/// let metrics = MonospaceMetrics::new(5.0, 10.0);
/// let ports = area.ports(&["alpha", "beta"], &metrics);
/// assert_eq!(ports.get("beta").unwrap().offset(), 10.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MemberArea {
    rows: Vec<Row>,
    embedded: Vec<Box<dyn Drawable>>,
    alignment: HorizontalAlignment,
    lane: f32,
}

impl MemberArea {
    /// Builds the area from its entries.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NotAMember`] when the icon lane is active and an
    /// entry is plain text, since every row of the lane needs a member.
    pub fn new(entries: Vec<MemberEntry>, style: &Style) -> Result<Self, LayoutError> {
        let icon_size = style.attribute_icon_size();
        let has_icons = icon_size > 0.0
            && entries.iter().any(|entry| {
                entry
                    .as_member()
                    .is_some_and(|member| member.visibility().is_some())
            });
        let lane = if has_icons {
            style.circled_character_radius() + ICON_LANE_GAP
        } else {
            0.0
        };
        let with_visibility_char = icon_size == 0.0;
        let alignment = style.horizontal_alignment();
        let font = style.font();

        let mut rows = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let search_text = entry.search_text();
            let row = match entry {
                MemberEntry::Member(member) => {
                    let mut member_font = font.clone();
                    if member.is_abstract() {
                        member_font = member_font.italic();
                    }
                    if member.is_static() {
                        member_font = member_font.underline();
                    }
                    Row {
                        icon: has_icons.then(|| {
                            VisibilityIcon::new(member.visibility(), icon_size, member.is_method())
                        }),
                        block: EntryBlock {
                            lines: lines_of(
                                &member.display(with_visibility_char),
                                &member_font,
                                alignment,
                            ),
                            lookup: Some(member.display(false)),
                            url: member.url().map(str::to_string),
                        },
                        search_text,
                    }
                }
                MemberEntry::Text(text) => {
                    if has_icons {
                        return Err(LayoutError::NotAMember { index });
                    }
                    Row {
                        icon: None,
                        block: EntryBlock {
                            lines: lines_of(&text, &font, alignment),
                            lookup: None,
                            url: None,
                        },
                        search_text,
                    }
                }
            };
            rows.push(row);
        }

        debug!(rows = rows.len(), lane; "Built member area");
        Ok(Self {
            rows,
            embedded: Vec::new(),
            alignment,
            lane,
        })
    }

    /// Appends an opaque block drawn beneath the members.
    pub fn with_embedded(mut self, block: Box<dyn Drawable>) -> Self {
        self.embedded.push(block);
        self
    }

    /// Width of the visibility icon lane, zero when there is none.
    pub fn icon_lane_width(&self) -> f32 {
        self.lane
    }

    /// Whether any member's display text starts with `prefix`.
    pub fn contains(&self, prefix: &str) -> bool {
        self.rows.iter().any(|row| {
            row.block
                .lookup
                .as_deref()
                .is_some_and(|lookup| lookup.starts_with(prefix))
        })
    }

    /// Elects at most one port per row among `short_names`.
    ///
    /// Offsets are measured from the top of the area.
    pub fn ports(&self, short_names: &[&str], metrics: &dyn TextMetrics) -> Ports {
        let names = sort_short_names(short_names.iter().copied());
        let mut ports = Ports::new();
        let mut y = 0.0;
        for row in &self.rows {
            let height = row.block.measure(metrics).height();
            if let Some((name, score)) = elect(&row.search_text, &names) {
                ports.add(name, score, y, height);
            }
            y += height;
        }
        debug!(candidates = names.len(), elected = ports.len(); "Elected member ports");
        ports
    }

    fn members_size(&self, metrics: &dyn TextMetrics) -> Size {
        let blocks = self
            .rows
            .iter()
            .map(|row| row.block.measure(metrics))
            .fold(Size::default(), Size::merge_vertical);
        blocks.delta(self.lane, 0.0)
    }

    fn layout(&self) -> LayoutGroup<'_> {
        let strategy = if self.lane > 0.0 {
            PlacementStrategy::Visibility {
                lane: self.lane,
                alignment: self.alignment,
            }
        } else {
            PlacementStrategy::from(self.alignment)
        };

        let mut group = LayoutGroup::new(strategy);
        for row in &self.rows {
            if let Some(icon) = &row.icon {
                group.add(icon);
            }
            group.add(&row.block);
        }
        group
    }
}

impl Drawable for MemberArea {
    fn measure(&self, metrics: &dyn TextMetrics) -> Size {
        self.embedded
            .iter()
            .map(|block| block.measure(metrics))
            .fold(self.members_size(metrics), Size::merge_vertical)
    }

    fn draw(&self, ctx: &DrawContext) {
        let members = self.members_size(ctx.metrics());
        self.layout().draw(ctx, members.width(), members.height());

        let mut ctx = ctx.with_translation(Translation::vertical(members.height()));
        for block in &self.embedded {
            block.draw(&ctx);
            ctx = ctx.with_translation(Translation::vertical(block.measure(ctx.metrics()).height()));
        }
    }

    fn inner_position(&self, query: &str, metrics: &dyn TextMetrics) -> Option<Bounds> {
        let members = self.members_size(metrics);
        self.layout()
            .inner_position(query, members.width(), members.height(), metrics)
    }
}

fn lines_of(text: &str, font: &FontConfiguration, alignment: HorizontalAlignment) -> VerticalStack {
    split_lines(text)
        .into_iter()
        .fold(VerticalStack::new().with_alignment(alignment), |stack, line| {
            stack.with_child(TextAtom::new(line, font.clone()))
        })
}
