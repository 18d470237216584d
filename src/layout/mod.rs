//! Reading-order reconstruction for multi-column PDF pages.
//!
//! Consumes positioned words (one list per page) and produces a single
//! ordered sequence of text lines, with an explicit [`ReconstructedLine::ColumnBreak`]
//! between the columns of a page.
//!
//! # Pipeline
//!
//! ```text
//! words → x0 sort → column sweep → y buckets → line text → ordered lines
//! ```
//!
//! Each page is processed independently; output is concatenated in page
//! order with no cross-page merging.
//!
//! # Example
//!
//! ```rust
//! use profile_lens::layout::{reconstruct, LayoutConfig, ReconstructedLine, WordFragment};
//!
//! let page = vec![
//!     WordFragment::new("Skills", 20.0, 100.0),
//!     WordFragment::new("Jane", 220.0, 100.0),
//!     WordFragment::new("Doe", 250.0, 99.5),
//! ];
//! let lines = reconstruct(&[page], &LayoutConfig::default()).unwrap();
//! assert_eq!(lines[0].as_text(), Some("Skills"));
//! assert_eq!(lines[1], ReconstructedLine::ColumnBreak);
//! assert_eq!(lines[2].as_text(), Some("Jane Doe"));
//! ```

pub mod columns;
pub mod lines;
pub mod types;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use columns::split_columns;
pub use lines::{assemble_lines, group_rows, LineRecord};
pub use types::{ReconstructedLine, WordFragment, COLUMN_BREAK_TOKEN};

/// Layout reconstruction errors.
///
/// All variants are precondition violations; heuristic misses (no second
/// column, empty pages) are never errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("page {page}, word {index} ({text:?}): {field} is not a finite number ({value})")]
    InvalidGeometry {
        page: usize,
        index: usize,
        text: String,
        field: &'static str,
        value: f64,
    },

    #[error("y_tolerance must be a finite number greater than zero, got {0}")]
    InvalidTolerance(f64),

    #[error("column_gap_threshold must be a finite, non-negative number, got {0}")]
    InvalidGapThreshold(f64),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Tuning for [`reconstruct`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of one line bucket, in PDF points. Should stay below normal
    /// inter-line spacing.
    pub y_tolerance: f64,
    /// Horizontal gap between consecutive x0-sorted words that starts a
    /// new column.
    pub column_gap_threshold: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            y_tolerance: 3.0,
            column_gap_threshold: 50.0,
        }
    }
}

impl LayoutConfig {
    /// Check that both parameters are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.y_tolerance.is_finite() || self.y_tolerance <= 0.0 {
            return Err(LayoutError::InvalidTolerance(self.y_tolerance));
        }
        if !self.column_gap_threshold.is_finite() || self.column_gap_threshold < 0.0 {
            return Err(LayoutError::InvalidGapThreshold(self.column_gap_threshold));
        }
        Ok(())
    }
}

/// Reconstruct reading order for a whole document.
///
/// Pages are emitted in order. Within a page, columns are emitted left to
/// right, each column top to bottom, with a [`ReconstructedLine::ColumnBreak`]
/// before every column except the first. Pages without words emit nothing.
///
/// # Errors
///
/// Returns [`LayoutError`] if the configuration is unusable or any word has a
/// non-finite `x0` or `top`. Validation happens before any output is built.
pub fn reconstruct<P>(pages: &[P], config: &LayoutConfig) -> Result<Vec<ReconstructedLine>>
where
    P: AsRef<[WordFragment]>,
{
    config.validate()?;
    for (page_idx, page) in pages.iter().enumerate() {
        validate_page(page_idx, page.as_ref())?;
    }

    let mut output = Vec::new();
    for (page_idx, page) in pages.iter().enumerate() {
        let before = output.len();
        reconstruct_page(page.as_ref(), config, &mut output);
        debug!(
            page = page_idx,
            words = page.as_ref().len(),
            lines = output.len() - before,
            "Page reconstructed"
        );
    }

    Ok(output)
}

/// Reconstruct a single page, appending to `output`.
///
/// Assumes the page and config were already validated.
fn reconstruct_page(words: &[WordFragment], config: &LayoutConfig, output: &mut Vec<ReconstructedLine>) {
    if words.is_empty() {
        return;
    }

    let columns = split_columns(words, config.column_gap_threshold);
    debug!(columns = columns.len(), "Columns detected");

    for (col_idx, column) in columns.iter().enumerate() {
        if col_idx > 0 {
            output.push(ReconstructedLine::ColumnBreak);
        }

        let rows = group_rows(column, config.y_tolerance);
        output.extend(assemble_lines(rows).into_iter().map(ReconstructedLine::Text));
    }
}

fn validate_page(page: usize, words: &[WordFragment]) -> Result<()> {
    for (index, word) in words.iter().enumerate() {
        for (field, value) in [("x0", word.x0), ("top", word.top)] {
            if !value.is_finite() {
                return Err(LayoutError::InvalidGeometry {
                    page,
                    index,
                    text: word.text.clone(),
                    field,
                    value,
                });
            }
        }
    }
    Ok(())
}
