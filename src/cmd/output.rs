use std::io::{self, Write};

use anyhow::Result;

use profile_lens::{ReconstructedLine, SectionRecord};

use crate::OutputFormat;

pub fn print_lines(lines: &[ReconstructedLine], format: OutputFormat) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(lines)?)?;
        }
    }
    Ok(())
}

pub fn print_sections(record: &SectionRecord, format: OutputFormat) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => out.write_all(render_sections(record).as_bytes())?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(record)?)?,
    }
    Ok(())
}

/// Plain-text report, one block per section.
pub fn render_sections(record: &SectionRecord) -> String {
    let mut text = String::new();

    text.push_str("NAME:\n");
    text.push_str(record.name.as_deref().unwrap_or("(none)"));
    text.push('\n');

    for (title, lines) in [
        ("HEADLINE", &record.headline),
        ("ABOUT", &record.about),
        ("TOP SKILLS", &record.top_skills),
    ] {
        text.push_str(&format!("\n{title}:\n"));
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }
    }

    text
}
