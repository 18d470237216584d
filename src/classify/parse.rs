//! Lenient parsing of model replies.
//!
//! Small models wrap their answer in prose or emit Python dict syntax. The
//! parser takes the span from the first `{` to the last `}`, tries strict
//! JSON, then retries after rewriting Python literals (single-quoted
//! strings, `True`/`False`/`None`, trailing commas) into JSON.

use serde_json::{Map, Value};

use super::{ClassifyError, Result};

/// Extract and parse the object embedded in a model reply.
pub fn parse_model_output(raw: &str) -> Result<Map<String, Value>> {
    let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) else {
        return Err(ClassifyError::NoObject);
    };
    if end <= start {
        return Err(ClassifyError::NoObject);
    }
    let block = raw[start..=end].trim();

    let strict_err = match serde_json::from_str::<Value>(block) {
        Ok(Value::Object(map)) => return Ok(map),
        Ok(other) => return Err(ClassifyError::Unparseable(format!("expected an object, got {other}"))),
        Err(e) => e,
    };

    match serde_json::from_str::<Value>(&python_literal_to_json(block)) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ClassifyError::Unparseable(format!("expected an object, got {other}"))),
        Err(_) => Err(ClassifyError::Unparseable(strict_err.to_string())),
    }
}

/// Rewrite a Python literal expression into JSON text.
///
/// Only the syntax a dict of strings, lists, numbers and constants can use
/// is handled; anything else passes through and fails JSON parsing.
fn python_literal_to_json(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' => {
                out.push('"');
                while let Some(s) = chars.next() {
                    match s {
                        '\\' => match chars.next() {
                            Some('\'') => out.push('\''),
                            Some(escaped) => {
                                out.push('\\');
                                out.push(escaped);
                            }
                            None => out.push_str("\\\\"),
                        },
                        _ if s == c => break,
                        '"' => out.push_str("\\\""),
                        '\n' => out.push_str("\\n"),
                        '\t' => out.push_str("\\t"),
                        '\r' => out.push_str("\\r"),
                        _ => out.push(s),
                    }
                }
                out.push('"');
            }
            '}' | ']' => {
                // Python allows a trailing comma before closing brackets.
                let kept = out.trim_end().trim_end_matches(',').len();
                out.truncate(kept);
                out.push(c);
            }
            _ if c.is_alphabetic() || c == '_' => {
                let mut ident = String::from(c);
                while let Some(&n) = chars.peek() {
                    if n.is_alphanumeric() || n == '_' {
                        ident.push(n);
                        chars.next();
                    } else {
                        break;
                    }
                }
                out.push_str(match ident.as_str() {
                    "True" => "true",
                    "False" => "false",
                    "None" => "null",
                    other => other,
                });
            }
            _ => out.push(c),
        }
    }

    out
}
