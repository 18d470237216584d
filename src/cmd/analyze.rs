use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use profile_lens::{segment, Classification, Classifier, LayoutConfig, ModelConfig, SectionRecord, SegmentConfig};

/// Combined output of `analyze`.
#[derive(Serialize)]
struct ProfileReport {
    sections: SectionRecord,
    classification: Classification,
}

pub async fn cmd_analyze(
    input: &Path,
    layout: LayoutConfig,
    sections: &SegmentConfig,
    model: &ModelConfig,
) -> Result<()> {
    // Build the classifier first so a missing API key fails before any work
    let classifier = Classifier::from_config(model)?;

    let lines = super::load_ordered_lines(input, &layout)?;
    let record = segment(&lines, sections);

    eprintln!(
        "Classifying with {} ({})",
        classifier.backend_name(),
        model.model_name()
    );
    let classification = classifier
        .classify(&record)
        .await
        .context("profile analysis failed")?;

    let report = ProfileReport {
        sections: record,
        classification,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
