use std::path::Path;

use anyhow::Result;

use profile_lens::LayoutConfig;

use super::output::print_lines;
use crate::OutputFormat;

pub fn cmd_lines(input: &Path, layout: LayoutConfig, format: OutputFormat) -> Result<()> {
    let lines = super::load_ordered_lines(input, &layout)?;
    print_lines(&lines, format)
}
