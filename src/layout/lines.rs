//! Line grouping within a column.
//!
//! Words are bucketed by their quantized `top` coordinate:
//! `round(top / y_tolerance) * y_tolerance`, rounding half to even. Words in
//! the same bucket form one line; small vertical jitter between words of a
//! visual line lands in one bucket as long as `y_tolerance` is smaller than
//! the normal line spacing.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::types::WordFragment;

/// Words sharing one vertical bucket, before joining.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord<'a> {
    /// Quantized vertical position (`bucket * y_tolerance`).
    pub y_key: f64,
    pub words: Vec<&'a WordFragment>,
}

impl LineRecord<'_> {
    /// Join words left to right with single spaces, trimmed.
    pub fn text(&self) -> String {
        let mut words = self.words.clone();
        words.sort_by(|a, b| a.x0.total_cmp(&b.x0));
        words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

/// Bucket index for a `top` coordinate. Equal indices mean the same line.
///
/// Kept as a float so coordinates beyond the `i64` range never collapse
/// into one bucket. Negative zero is folded into zero.
pub fn bucket_index(top: f64, y_tolerance: f64) -> f64 {
    (top / y_tolerance).round_ties_even() + 0.0
}

/// Total order over finite bucket indices.
#[derive(Debug, Clone, Copy)]
struct BucketKey(f64);

impl PartialEq for BucketKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for BucketKey {}

impl PartialOrd for BucketKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BucketKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Group a column's words into lines, top to bottom.
///
/// Words keep their column order inside each line.
pub fn group_rows<'a>(column: &[&'a WordFragment], y_tolerance: f64) -> Vec<LineRecord<'a>> {
    let mut rows: BTreeMap<BucketKey, Vec<&'a WordFragment>> = BTreeMap::new();
    for word in column {
        rows.entry(BucketKey(bucket_index(word.top, y_tolerance)))
            .or_default()
            .push(*word);
    }

    rows.into_iter()
        .map(|(BucketKey(bucket), words)| LineRecord {
            y_key: bucket * y_tolerance,
            words,
        })
        .collect()
}

/// Render lines to text, dropping lines that end up empty.
pub fn assemble_lines(rows: Vec<LineRecord<'_>>) -> Vec<String> {
    rows.iter()
        .map(LineRecord::text)
        .filter(|line| !line.is_empty())
        .collect()
}
