//! Subcommand implementations.

pub mod analyze;
pub mod lines;
pub mod output;
pub mod sections;

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use profile_lens::extract::{self, InputKind};
use profile_lens::{reconstruct, LayoutConfig, ReconstructedLine};

/// Load ordered lines from any supported input.
///
/// `.txt` files are taken as already reconstructed; everything else goes
/// through word extraction and layout reconstruction.
pub fn load_ordered_lines(input: &Path, layout: &LayoutConfig) -> Result<Vec<ReconstructedLine>> {
    let lines = if InputKind::from_path(input) == Some(InputKind::Lines) {
        extract::load_lines(input)?
    } else {
        let pages = extract::load_pages(input)?;
        reconstruct(&pages, layout)?
    };

    if !lines.iter().any(ReconstructedLine::is_column_break) {
        warn!("Column break not detected, layout may be incorrect");
    }

    Ok(lines)
}
