//! Connector ports and their election over member text.
//!
//! A port anchors a connector to one row of a member area. For every row the
//! candidate short names are tried longest first; the first one that appears
//! in the row's text is elected, scoring higher for a whole-word match than
//! for a plain substring.

use indexmap::IndexMap;

/// Score of a short name appearing as a whole word.
pub const WHOLE_WORD_SCORE: u32 = 100;

/// Score of a short name appearing inside a longer word.
pub const SUBSTRING_SCORE: u32 = 50;

/// Vertical slot of a port inside its member area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortGeometry {
    score: u32,
    offset: f32,
    height: f32,
}

impl PortGeometry {
    pub fn new(score: u32, offset: f32, height: f32) -> Self {
        Self {
            score,
            offset,
            height,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Distance from the top of the area to the top of the row.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Vertical center of the row.
    pub fn center(&self) -> f32 {
        self.offset + self.height / 2.0
    }
}

/// Ports keyed by short name, at most one per name, in election order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ports {
    ports: IndexMap<String, PortGeometry>,
}

impl Ports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a port, replacing an existing one only on a strictly better
    /// score.
    pub fn add(&mut self, name: &str, score: u32, offset: f32, height: f32) {
        let geometry = PortGeometry::new(score, offset, height);
        match self.ports.get_mut(name) {
            Some(existing) if existing.score() >= score => {}
            Some(existing) => *existing = geometry,
            None => {
                self.ports.insert(name.to_string(), geometry);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&PortGeometry> {
        self.ports.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PortGeometry)> {
        self.ports.iter().map(|(name, geometry)| (name.as_str(), geometry))
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Moves every port down by `dy`, for areas placed below a header.
    pub fn translate_y(self, dy: f32) -> Self {
        Self {
            ports: self
                .ports
                .into_iter()
                .map(|(name, geometry)| {
                    (
                        name,
                        PortGeometry::new(geometry.score, geometry.offset + dy, geometry.height),
                    )
                })
                .collect(),
        }
    }

    /// Combines two port sets with the same better-score-wins rule as
    /// [`Ports::add`].
    pub fn merge(mut self, other: Ports) -> Self {
        for (name, geometry) in other.ports {
            self.add(&name, geometry.score, geometry.offset, geometry.height);
        }
        self
    }
}

/// Orders candidate short names longest first, ties broken lexically.
///
/// # Examples
///
/// ```
/// # use armillary_core::draw::sort_short_names;
/// let sorted = sort_short_names(["id", "name", "key", "age"]);
/// assert_eq!(sorted, vec!["name", "age", "key", "id"]);
/// ```
pub fn sort_short_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut names: Vec<&str> = names.into_iter().collect();
    names.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    names.dedup();
    names
}

/// Elects the first short name that appears in `text`.
///
/// `sorted_names` must already be in election order (see
/// [`sort_short_names`]). Returns the elected name with its score.
pub fn elect<'a>(text: &str, sorted_names: &[&'a str]) -> Option<(&'a str, u32)> {
    sorted_names.iter().find_map(|name| match score(text, name) {
        0 => None,
        score => Some((*name, score)),
    })
}

fn score(text: &str, name: &str) -> u32 {
    if name.is_empty() {
        return 0;
    }
    if matches_whole_word(text, name) {
        WHOLE_WORD_SCORE
    } else if text.contains(name) {
        SUBSTRING_SCORE
    } else {
        0
    }
}

/// Whether `name` occurs in `text` with a word boundary on both sides.
///
/// A boundary sits between a word character and a non-word character, the
/// start and end of the text counting as non-word.
fn matches_whole_word(text: &str, name: &str) -> bool {
    let (Some(first), Some(last)) = (name.chars().next(), name.chars().next_back()) else {
        return false;
    };

    text.char_indices()
        .filter(|(start, _)| text[*start..].starts_with(name))
        .any(|(start, _)| {
            let end = start + name.len();
            let before = text[..start].chars().next_back();
            let after = text[end..].chars().next();
            is_word(before) != is_word(Some(first)) && is_word(Some(last)) != is_word(after)
        })
}

fn is_word(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_sort_short_names_dedups() {
        assert_eq!(sort_short_names(["b", "a", "b"]), vec!["a", "b"]);
    }

    #[test]
    fn test_whole_word_beats_substring() {
        assert_eq!(score("id: int", "id"), WHOLE_WORD_SCORE);
        assert_eq!(score("userid: int", "id"), SUBSTRING_SCORE);
        assert_eq!(score("count", "id"), 0);
    }

    #[test]
    fn test_boundary_at_later_occurrence() {
        // First occurrence is inside a word, the second one stands alone
        assert_eq!(score("idle id", "id"), WHOLE_WORD_SCORE);
    }

    #[test]
    fn test_underscore_is_word_character() {
        assert_eq!(score("my_id", "id"), SUBSTRING_SCORE);
    }

    #[test]
    fn test_non_word_names() {
        assert_eq!(score("a - b", "-"), SUBSTRING_SCORE);
        assert_eq!(score("a-b", "-"), WHOLE_WORD_SCORE);
    }

    #[test]
    fn test_empty_name_never_matches() {
        assert_eq!(score("anything", ""), 0);
        assert_eq!(elect("anything", &[""]), None);
    }

    #[test]
    fn test_elect_prefers_longest_name() {
        let names = sort_short_names(["id", "parent_id"]);
        assert_eq!(elect("parent_id: int", &names), Some(("parent_id", 100)));
    }

    #[test]
    fn test_elect_first_nonzero_wins() {
        // "user" only as substring still beats the shorter whole-word "id"
        let names = sort_short_names(["id", "user"]);
        assert_eq!(elect("username id", &names), Some(("user", 50)));
    }

    #[test]
    fn test_add_keeps_better_score() {
        let mut ports = Ports::new();
        ports.add("id", 50, 0.0, 10.0);
        ports.add("id", 100, 20.0, 10.0);
        ports.add("id", 100, 40.0, 10.0);
        ports.add("id", 50, 60.0, 10.0);

        let port = ports.get("id").unwrap();
        assert_eq!(port.score(), 100);
        assert_approx_eq!(f32, port.offset(), 20.0);
        assert_eq!(ports.len(), 1);
    }

    #[test]
    fn test_translate_y() {
        let mut ports = Ports::new();
        ports.add("a", 100, 0.0, 10.0);
        ports.add("b", 50, 10.0, 12.0);

        let moved = ports.translate_y(30.0);
        assert_approx_eq!(f32, moved.get("a").unwrap().offset(), 30.0);
        assert_approx_eq!(f32, moved.get("b").unwrap().center(), 46.0);
    }

    #[test]
    fn test_merge_uses_score() {
        let mut left = Ports::new();
        left.add("a", 50, 0.0, 10.0);
        left.add("b", 100, 0.0, 10.0);
        let mut right = Ports::new();
        right.add("a", 100, 40.0, 10.0);
        right.add("b", 50, 40.0, 10.0);
        right.add("c", 50, 50.0, 10.0);

        let merged = left.merge(right);
        assert_approx_eq!(f32, merged.get("a").unwrap().offset(), 40.0);
        assert_approx_eq!(f32, merged.get("b").unwrap().offset(), 0.0);
        assert_eq!(
            merged.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }
}
