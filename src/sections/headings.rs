//! Section heading vocabulary.
//!
//! Each canonical [`Heading`] maps to the literal lines that announce it.
//! Matching trims the line and compares case-insensitively, so
//! `"  TOP SKILLS "` matches the `top skills` variant. Variants can be
//! replaced per heading from configuration to support other export
//! languages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical section headings the segmenter reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heading {
    TopSkills,
    Summary,
    Certifications,
    Education,
    Experience,
    Languages,
}

impl Heading {
    pub const ALL: [Heading; 6] = [
        Heading::TopSkills,
        Heading::Summary,
        Heading::Certifications,
        Heading::Education,
        Heading::Experience,
        Heading::Languages,
    ];

    /// Headings that end the skills list in the left column.
    pub const SKILLS_TERMINATORS: [Heading; 4] = [
        Heading::Certifications,
        Heading::Education,
        Heading::Experience,
        Heading::Languages,
    ];

    /// Headings that end the summary in the right column.
    pub const ABOUT_TERMINATORS: [Heading; 2] = [Heading::Education, Heading::Experience];

    /// Configuration key, e.g. `top_skills`.
    pub fn key(self) -> &'static str {
        match self {
            Heading::TopSkills => "top_skills",
            Heading::Summary => "summary",
            Heading::Certifications => "certifications",
            Heading::Education => "education",
            Heading::Experience => "experience",
            Heading::Languages => "languages",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.key() == key)
    }

    /// Default English literal for this heading.
    pub fn default_literal(self) -> &'static str {
        match self {
            Heading::TopSkills => "top skills",
            Heading::Summary => "summary",
            Heading::Certifications => "certifications",
            Heading::Education => "education",
            Heading::Experience => "experience",
            Heading::Languages => "languages",
        }
    }
}

/// Recognized literal variants per heading.
///
/// Deserializes from a partial map; headings left out keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<String>>", into = "BTreeMap<String, Vec<String>>")]
pub struct HeadingSet {
    variants: BTreeMap<Heading, Vec<String>>,
}

impl Default for HeadingSet {
    fn default() -> Self {
        let variants = Heading::ALL
            .iter()
            .map(|h| (*h, vec![h.default_literal().to_string()]))
            .collect();
        Self { variants }
    }
}

impl HeadingSet {
    /// Replace the variants recognized for `heading`.
    ///
    /// Blank variants are ignored, so they never match empty lines. An
    /// empty list disables the heading entirely.
    #[must_use]
    pub fn with_variants<I, S>(mut self, heading: Heading, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = variants
            .into_iter()
            .map(|v| normalize(v.as_ref()))
            .filter(|v| !v.is_empty())
            .collect();
        self.variants.insert(heading, normalized);
        self
    }

    /// Variants recognized for `heading`, normalized to trimmed lowercase.
    pub fn variants(&self, heading: Heading) -> &[String] {
        self.variants.get(&heading).map_or(&[], Vec::as_slice)
    }

    /// Whether `line` announces `heading`.
    pub fn matches(&self, heading: Heading, line: &str) -> bool {
        let line = normalize(line);
        self.variants(heading).iter().any(|v| *v == line)
    }

    /// Whether `line` announces any of `headings`.
    pub fn matches_any(&self, headings: &[Heading], line: &str) -> bool {
        let line = normalize(line);
        headings
            .iter()
            .any(|h| self.variants(*h).iter().any(|v| *v == line))
    }
}

impl TryFrom<BTreeMap<String, Vec<String>>> for HeadingSet {
    type Error = String;

    fn try_from(overrides: BTreeMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        overrides
            .into_iter()
            .try_fold(Self::default(), |set, (key, variants)| {
                let heading = Heading::from_key(&key).ok_or_else(|| format!("unknown heading '{key}'"))?;
                Ok(set.with_variants(heading, variants))
            })
    }
}

impl From<HeadingSet> for BTreeMap<String, Vec<String>> {
    fn from(set: HeadingSet) -> Self {
        set.variants
            .into_iter()
            .map(|(heading, variants)| (heading.key().to_string(), variants))
            .collect()
    }
}

fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}
