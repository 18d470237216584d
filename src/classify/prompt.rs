//! Classification prompt.

use crate::sections::SectionRecord;

const INSTRUCTIONS: &str = r#"You are a deterministic classification engine.
Classify the signal strength of each profile section. Do not summarize,
rewrite or chat. Return JSON only, with exactly these fields:

{
  "headline_status": "missing" | "generic" | "clear",
  "summary_status": "missing" | "thin" | "substantive",
  "skills_status": "missing" | "generic" | "focused",
  "notes": string[]
}

HEADLINE: missing = null or empty; generic = identity or education only;
clear = states role, direction or specialization.
SUMMARY: missing = null or empty; thin = short, vague, buzzwords or
interests only; substantive = explains work, learning or building clearly.
SKILLS: missing = empty or null; generic = vague or unrelated categories;
focused = concrete and relevant skills.
If unsure, choose the weaker label.

NOTES: at most 2, each under 15 words, describing structural or signal
issues that justify a weaker label. Never copy input sentences. Return []
if no justification is needed.

INPUT:
"#;

/// Build the prompt for one profile.
///
/// # Errors
///
/// Fails only if the record cannot be serialized.
pub fn build_prompt(record: &SectionRecord) -> serde_json::Result<String> {
    let input = serde_json::to_string(record)?;
    Ok(format!("{INSTRUCTIONS}{input}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_record_as_json() {
        let record = SectionRecord {
            name: Some("Jane \"JD\" Doe".into()),
            top_skills: vec!["Rust".into()],
            ..SectionRecord::default()
        };
        let prompt = build_prompt(&record).unwrap();
        assert!(prompt.contains(r#""name":"Jane \"JD\" Doe""#));
        assert!(prompt.contains(r#""top_skills":["Rust"]"#));
        assert!(prompt.contains("headline_status"));
        assert!(prompt.ends_with("}\n"));
    }
}
