//! Section segmentation of a reconstructed profile.
//!
//! Splits the ordered lines at the first column break, then runs two
//! independent forward scans:
//!
//! - left column: lines after the `Top Skills` heading, up to the next
//!   known heading, become `top_skills`
//! - right column: the first non-blank line is the `name`; long lines up to
//!   `Summary` form the `headline`; lines after `Summary` up to
//!   `Education`/`Experience` form `about`
//!
//! Missing sections are never errors: they come back as `None` or empty
//! lists. Output lines are trimmed and keep their original order.

pub mod headings;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::ReconstructedLine;

pub use headings::{Heading, HeadingSet};

/// Structured profile sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub name: Option<String>,
    #[serde(default)]
    pub headline: Vec<String>,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub top_skills: Vec<String>,
}

/// Tuning for [`segment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentConfig {
    pub headings: HeadingSet,
    /// Headline candidates with this many whitespace-separated tokens or
    /// fewer are treated as location noise and skipped. Genuinely short
    /// headlines are lost to this filter; set to 0 to disable it.
    pub location_max_tokens: usize,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            headings: HeadingSet::default(),
            location_max_tokens: 2,
        }
    }
}

/// Segment reconstructed lines into a [`SectionRecord`].
///
/// Without a column break the whole input is scanned as the right column and
/// `top_skills` stays empty. Column breaks after the first count as blank
/// lines.
pub fn segment(lines: &[ReconstructedLine], config: &SegmentConfig) -> SectionRecord {
    let (left, right) = match lines.iter().position(ReconstructedLine::is_column_break) {
        Some(idx) => (&lines[..idx], &lines[idx + 1..]),
        None => {
            debug!("No column break, scanning all lines as the right column");
            (&lines[..0], lines)
        }
    };

    let mut record = SectionRecord {
        top_skills: scan_top_skills(left, &config.headings),
        ..SectionRecord::default()
    };
    scan_right_column(right, config, &mut record);

    debug!(
        name = record.name.is_some(),
        headline = record.headline.len(),
        about = record.about.len(),
        top_skills = record.top_skills.len(),
        "Sections detected"
    );

    record
}

/// Text of a line, trimmed. Column breaks read as blank.
fn trimmed(line: &ReconstructedLine) -> &str {
    line.as_text().map_or("", str::trim)
}

fn scan_top_skills(left: &[ReconstructedLine], headings: &HeadingSet) -> Vec<String> {
    let mut skills = Vec::new();
    let mut collecting = false;

    for line in left.iter().map(trimmed) {
        if headings.matches(Heading::TopSkills, line) {
            collecting = true;
            continue;
        }
        if !collecting {
            continue;
        }
        if headings.matches_any(&Heading::SKILLS_TERMINATORS, line) {
            break;
        }
        if !line.is_empty() {
            skills.push(line.to_string());
        }
    }

    skills
}

fn scan_right_column(right: &[ReconstructedLine], config: &SegmentConfig, record: &mut SectionRecord) {
    let headings = &config.headings;
    let mut cursor = right.iter().map(trimmed).peekable();

    // Name: first non-blank line.
    while cursor.next_if(|line| line.is_empty()).is_some() {}
    record.name = cursor.next().map(str::to_string);

    // Headline: stops on (without consuming) the summary heading.
    while let Some(line) = cursor.next_if(|line| !headings.matches(Heading::Summary, line)) {
        if line.is_empty() || line.split_whitespace().count() <= config.location_max_tokens {
            continue;
        }
        record.headline.push(line.to_string());
    }

    // About: only when the headline scan stopped on the summary heading.
    if cursor.next().is_none() {
        return;
    }
    for line in cursor {
        if headings.matches_any(&Heading::ABOUT_TERMINATORS, line) {
            break;
        }
        if !line.is_empty() {
            record.about.push(line.to_string());
        }
    }
}
