use std::path::Path;

use anyhow::Result;

use profile_lens::{segment, LayoutConfig, SegmentConfig};

use super::output::print_sections;
use crate::OutputFormat;

pub fn cmd_sections(
    input: &Path,
    layout: LayoutConfig,
    sections: &SegmentConfig,
    format: OutputFormat,
) -> Result<()> {
    let lines = super::load_ordered_lines(input, &layout)?;
    let record = segment(&lines, sections);
    print_sections(&record, format)
}
