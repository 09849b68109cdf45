//! Class members and member-area entries.

use std::fmt;

/// Access level marker of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
    Protected,
    PackagePrivate,
}

impl Visibility {
    /// Parses the leading marker character of a member declaration.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Public),
            '-' => Some(Self::Private),
            '#' => Some(Self::Protected),
            '~' => Some(Self::PackagePrivate),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Public => '+',
            Self::Private => '-',
            Self::Protected => '#',
            Self::PackagePrivate => '~',
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::PackagePrivate => "package-private",
        };
        f.write_str(name)
    }
}

/// One field or method of a class-like element.
///
/// # Examples
///
/// ```
/// # use armillary_core::draw::{Member, Visibility};
/// let member = Member::from_declaration("{static} -count: int");
///
/// assert_eq!(member.visibility(), Some(Visibility::Private));
/// assert!(member.is_static());
/// assert_eq!(member.display(false), "count: int");
/// assert_eq!(member.display(true), "-count: int");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    display: String,
    visibility: Option<Visibility>,
    is_static: bool,
    is_abstract: bool,
    url: Option<String>,
}

impl Member {
    /// Creates a member with the given display text and no modifiers.
    pub fn new(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            visibility: None,
            is_static: false,
            is_abstract: false,
            url: None,
        }
    }

    /// Builds a member from declaration text.
    ///
    /// Recognizes leading `{static}`, `{classifier}` and `{abstract}`
    /// modifiers, in any order, followed by an optional visibility marker
    /// character. A lone marker character is kept as display text.
    pub fn from_declaration(declaration: &str) -> Self {
        let mut rest = declaration.trim();
        let mut is_static = false;
        let mut is_abstract = false;

        loop {
            if let Some(stripped) = rest
                .strip_prefix("{static}")
                .or_else(|| rest.strip_prefix("{classifier}"))
            {
                is_static = true;
                rest = stripped.trim_start();
            } else if let Some(stripped) = rest.strip_prefix("{abstract}") {
                is_abstract = true;
                rest = stripped.trim_start();
            } else {
                break;
            }
        }

        let mut chars = rest.chars();
        let visibility = match (chars.next().and_then(Visibility::from_char), chars.next()) {
            (Some(visibility), Some(_)) => Some(visibility),
            _ => None,
        };
        let display = match visibility {
            Some(_) => rest[1..].to_string(),
            None => rest.to_string(),
        };

        Self {
            display,
            visibility,
            is_static,
            is_abstract,
            url: None,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Attaches a hyperlink target to the member.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Returns the display text, prefixed with the visibility marker
    /// character when `with_visibility_char` is set.
    pub fn display(&self, with_visibility_char: bool) -> String {
        match (with_visibility_char, self.visibility) {
            (true, Some(visibility)) => format!("{}{}", visibility.as_char(), self.display),
            _ => self.display.clone(),
        }
    }

    pub fn visibility(&self) -> Option<Visibility> {
        self.visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Methods are told apart from fields by a parameter list.
    pub fn is_method(&self) -> bool {
        self.display.contains('(')
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// One line item of a member area.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberEntry {
    Member(Member),
    /// Free text, such as a separator title.
    Text(String),
}

impl MemberEntry {
    /// The text ports and lookups are matched against.
    pub fn search_text(&self) -> String {
        match self {
            Self::Member(member) => member.display(false),
            Self::Text(text) => text.clone(),
        }
    }

    pub fn as_member(&self) -> Option<&Member> {
        match self {
            Self::Member(member) => Some(member),
            Self::Text(_) => None,
        }
    }
}

impl From<Member> for MemberEntry {
    fn from(member: Member) -> Self {
        Self::Member(member)
    }
}

impl From<&str> for MemberEntry {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Splits text into display lines on real newlines and on the two-character
/// escape `\n`.
///
/// # Examples
///
/// ```
/// # use armillary_core::draw::split_lines;
/// assert_eq!(split_lines(r"first\nsecond"), vec!["first", "second"]);
/// assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .flat_map(|line| line.split("\\n"))
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
