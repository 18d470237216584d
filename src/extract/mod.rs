//! Input adapters feeding the layout and section passes.
//!
//! | Input | Loader | Feature Flag |
//! |-------|--------|-------------|
//! | word geometry JSON (`[[{"text","x0","top"}, ..], ..]`) | [`load_word_pages`] | always |
//! | reconstructed lines, one per row | [`load_lines`] | always |
//! | PDF | `pdf::extract_word_pages` | `pdf` |

#[cfg(feature = "pdf")]
pub mod pdf;
pub mod words;

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::layout::{ReconstructedLine, WordFragment};

/// What a path on disk holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Word geometry per page, JSON.
    Words,
    /// Already reconstructed lines, plain text.
    Lines,
    Pdf,
}

impl InputKind {
    /// Guess the kind from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Words),
            "txt" | "lines" => Some(Self::Lines),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// Parse word geometry JSON: one array of words per page.
///
/// Every word needs `text`, `x0` and `top`; a missing or non-numeric
/// coordinate is an error, never a default.
pub fn parse_word_pages(json: &str) -> Result<Vec<Vec<WordFragment>>> {
    serde_json::from_str(json).context("invalid word geometry (expected [[{text, x0, top}, ...], ...])")
}

/// Load word geometry JSON from disk.
pub fn load_word_pages(path: &Path) -> Result<Vec<Vec<WordFragment>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let pages = parse_word_pages(&content).with_context(|| format!("in {}", path.display()))?;
    debug!(pages = pages.len(), path = %path.display(), "Loaded word geometry");
    Ok(pages)
}

/// Parse reconstructed lines, one per row.
pub fn parse_lines(text: &str) -> Vec<ReconstructedLine> {
    text.lines().map(ReconstructedLine::parse).collect()
}

/// Load reconstructed lines from disk.
pub fn load_lines(path: &Path) -> Result<Vec<ReconstructedLine>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(parse_lines(&content))
}

/// Load word geometry from a JSON or PDF file.
///
/// # Errors
///
/// Fails for unreadable files, invalid geometry, unsupported extensions and
/// PDFs when the crate was built without the `pdf` feature.
pub fn load_pages(path: &Path) -> Result<Vec<Vec<WordFragment>>> {
    match InputKind::from_path(path) {
        Some(InputKind::Words) => load_word_pages(path),
        Some(InputKind::Pdf) => load_pdf(path),
        Some(InputKind::Lines) => bail!(
            "{} holds reconstructed lines, not word geometry",
            path.display()
        ),
        None => bail!(
            "unsupported input {} (expected .json word geometry or .pdf)",
            path.display()
        ),
    }
}

#[cfg(feature = "pdf")]
fn load_pdf(path: &Path) -> Result<Vec<Vec<WordFragment>>> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    pdf::extract_word_pages(&bytes).with_context(|| format!("in {}", path.display()))
}

#[cfg(not(feature = "pdf"))]
fn load_pdf(path: &Path) -> Result<Vec<Vec<WordFragment>>> {
    bail!(
        "cannot read {}: built without PDF support (enable the `pdf` feature)",
        path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_extension() {
        assert_eq!(InputKind::from_path(Path::new("a/profile.PDF")), Some(InputKind::Pdf));
        assert_eq!(InputKind::from_path(Path::new("words.json")), Some(InputKind::Words));
        assert_eq!(InputKind::from_path(Path::new("out.txt")), Some(InputKind::Lines));
        assert_eq!(InputKind::from_path(Path::new("README")), None);
    }

    #[test]
    fn parses_pages_of_words() {
        let pages = parse_word_pages(
            r#"[[{"text": "Jane", "x0": 200, "top": 40.5}], [], [{"text": "x", "x0": 1, "top": 2, "bottom": 9}]]"#,
        )
        .unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0][0], WordFragment::new("Jane", 200.0, 40.5));
        assert!(pages[1].is_empty());
    }

    #[test]
    fn missing_coordinate_is_an_error() {
        let err = parse_word_pages(r#"[[{"text": "Jane", "top": 4}]]"#).unwrap_err();
        assert!(format!("{err:#}").contains("x0"));
    }

    #[test]
    fn null_coordinate_is_an_error() {
        assert!(parse_word_pages(r#"[[{"text": "Jane", "x0": null, "top": 4}]]"#).is_err());
    }

    #[test]
    fn lines_keep_blank_rows_and_parse_marker() {
        let lines = parse_lines("Top Skills\n\n<<COLUMN_BREAK>>\nJane Doe\n");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].as_text(), Some(""));
        assert!(lines[2].is_column_break());
    }

    #[test]
    fn lines_file_is_not_word_geometry() {
        let err = load_pages(Path::new("profile.txt")).unwrap_err();
        assert!(err.to_string().contains("reconstructed lines"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(load_pages(Path::new("profile.docx")).is_err());
    }
}
