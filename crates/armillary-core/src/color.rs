//! CSS colors.
//!
//! Style values carry colors as CSS strings. [`Color`] parses them with the
//! `color` crate; a missing or unparseable value resolves to the
//! [`Color::transparent`] sentinel rather than an error.

use std::{fmt, str::FromStr};

use color::DynamicColor;
use log::warn;

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color string such as `#ff0000`, `rgb(255 0 0)` or `red`.
    ///
    /// # Examples
    ///
    /// ```
    /// use armillary_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// The fully transparent sentinel used for every missing color.
    pub fn transparent() -> Self {
        Self::new("transparent").expect("'transparent' is a valid CSS color")
    }

    /// Resolves an optional color string.
    ///
    /// `None` and unparseable strings both yield [`Color::transparent`]; the
    /// latter is logged as a warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use armillary_core::color::Color;
    ///
    /// assert!(Color::resolve(None).is_transparent());
    /// assert!(Color::resolve(Some("no-such-color")).is_transparent());
    /// assert!(!Color::resolve(Some("navy")).is_transparent());
    /// ```
    pub fn resolve(color_str: Option<&str>) -> Self {
        match color_str.map(Self::new) {
            Some(Ok(color)) => color,
            Some(Err(err)) => {
                warn!(error = err.as_str(); "Unresolved color, using transparent");
                Self::transparent()
            }
            None => Self::transparent(),
        }
    }

    /// Returns true when nothing would be painted with this color.
    pub fn is_transparent(&self) -> bool {
        self.alpha() == 0.0
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Opacity between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns the SVG paint value, `none` for transparent colors.
    pub fn to_svg_paint(&self) -> String {
        if self.is_transparent() {
            "none".to_string()
        } else {
            self.to_string()
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.color, f)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_svg_paint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
        assert!(!color.is_transparent());
    }

    #[test]
    fn test_color_transparent() {
        let color = Color::transparent();
        assert!(color.is_transparent());
        assert_eq!(color.to_svg_paint(), "none");
    }

    #[test]
    fn test_color_resolve_missing_is_transparent() {
        assert!(Color::resolve(None).is_transparent());
    }

    #[test]
    fn test_color_resolve_invalid_is_transparent() {
        assert!(Color::resolve(Some("#zzzzzz")).is_transparent());
    }

    #[test]
    fn test_color_resolve_valid() {
        let color = Color::resolve(Some("red"));
        assert_eq!(color, Color::new("red").unwrap());
        assert_eq!(color.to_svg_paint(), "red");
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::new("red").unwrap();
        let transparent = color.with_alpha(0.0);
        assert!(transparent.is_transparent());
        assert!((color.with_alpha(0.5).alpha() - 0.5).abs() < 0.001);
    }
}
