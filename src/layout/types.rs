//! Shared types for layout reconstruction.
//!
//! Kept separate from the column and line passes so both can depend on them
//! without depending on each other.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Printed form of [`ReconstructedLine::ColumnBreak`].
///
/// Word extraction never produces this token: words do not contain
/// whitespace and the marker is only emitted by the column pass.
pub const COLUMN_BREAK_TOKEN: &str = "<<COLUMN_BREAK>>";

/// One recognized word on a page.
///
/// Coordinates use a top-down system in PDF points: `x0` is the left edge,
/// `top` the distance from the top of the page. Unknown keys (`x1`,
/// `bottom`, ...) in serialized input are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordFragment {
    pub text: String,
    pub x0: f64,
    pub top: f64,
}

impl WordFragment {
    pub fn new(text: impl Into<String>, x0: f64, top: f64) -> Self {
        Self {
            text: text.into(),
            x0,
            top,
        }
    }
}

/// A finished line in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReconstructedLine {
    /// Words of one visual line joined left to right.
    Text(String),
    /// Boundary between two physical columns of a page.
    ColumnBreak,
}

impl ReconstructedLine {
    /// Parse a line of previously printed output.
    ///
    /// The exact marker token (surrounding whitespace allowed) becomes
    /// [`ReconstructedLine::ColumnBreak`]; anything else is text.
    pub fn parse(line: &str) -> Self {
        if line.trim() == COLUMN_BREAK_TOKEN {
            Self::ColumnBreak
        } else {
            Self::Text(line.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::ColumnBreak => None,
        }
    }

    pub fn is_column_break(&self) -> bool {
        matches!(self, Self::ColumnBreak)
    }
}

impl fmt::Display for ReconstructedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::ColumnBreak => f.write_str(COLUMN_BREAK_TOKEN),
        }
    }
}

impl From<&str> for ReconstructedLine {
    fn from(line: &str) -> Self {
        Self::parse(line)
    }
}

impl Serialize for ReconstructedLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_parses_to_column_break() {
        assert_eq!(ReconstructedLine::parse("<<COLUMN_BREAK>>"), ReconstructedLine::ColumnBreak);
        assert_eq!(ReconstructedLine::parse("  <<COLUMN_BREAK>>\r"), ReconstructedLine::ColumnBreak);
        assert!(ReconstructedLine::from(COLUMN_BREAK_TOKEN).is_column_break());
    }

    #[test]
    fn other_lines_stay_text() {
        let line = ReconstructedLine::parse(" Summary ");
        assert_eq!(line.as_text(), Some(" Summary "));
        assert!(!line.is_column_break());
        assert_eq!(ReconstructedLine::parse("<<COLUMN_BREAK>> extra").as_text(), Some("<<COLUMN_BREAK>> extra"));
    }

    #[test]
    fn display_prints_marker_token() {
        assert_eq!(ReconstructedLine::ColumnBreak.to_string(), COLUMN_BREAK_TOKEN);
        assert_eq!(ReconstructedLine::Text("Jane Doe".into()).to_string(), "Jane Doe");
    }

    #[test]
    fn serializes_as_plain_strings() {
        let lines = vec![ReconstructedLine::Text("a".into()), ReconstructedLine::ColumnBreak];
        let json = serde_json::to_string(&lines).unwrap();
        assert_eq!(json, r#"["a","<<COLUMN_BREAK>>"]"#);
    }

    #[test]
    fn word_ignores_extra_keys() {
        let json = r#"{"text": "Rust", "x0": 12.5, "x1": 40.0, "top": 88.0, "bottom": 98.0}"#;
        let word: WordFragment = serde_json::from_str(json).unwrap();
        assert_eq!(word, WordFragment::new("Rust", 12.5, 88.0));
    }

    #[test]
    fn word_missing_geometry_is_rejected() {
        let err = serde_json::from_str::<WordFragment>(r#"{"text": "Rust", "x0": 1.0}"#).unwrap_err();
        assert!(err.to_string().contains("top"));
    }
}
