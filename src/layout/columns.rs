//! Column detection from horizontal gaps.
//!
//! A single left-to-right sweep over x0-sorted words: a gap wider than the
//! threshold between two consecutive words starts a new column. This is not
//! a clustering pass; it assumes columns are well separated and never
//! interleave in x.
//!
//! Complexity: O(n log n) for the sort, O(n) for the sweep.

use super::types::WordFragment;

/// Split a page's words into columns, left to right.
///
/// Words inside each column keep ascending x0 order (ties in input order).
/// Returns no columns for an empty page. `x0` values must be finite.
pub fn split_columns(words: &[WordFragment], gap_threshold: f64) -> Vec<Vec<&WordFragment>> {
    let mut sorted: Vec<&WordFragment> = words.iter().collect();
    sorted.sort_by(|a, b| a.x0.total_cmp(&b.x0));

    let Some(first) = sorted.first() else {
        return Vec::new();
    };

    let mut columns: Vec<Vec<&WordFragment>> = vec![Vec::new()];
    let mut last_x = first.x0;

    for word in sorted {
        if word.x0 - last_x > gap_threshold {
            columns.push(Vec::new());
        }
        if let Some(column) = columns.last_mut() {
            column.push(word);
        }
        last_x = word.x0;
    }

    columns
}
