//! PDF word geometry via `pdfium-render` (Chromium's PDF library).
//!
//! # Pipeline
//!
//! ```text
//! PDF bytes → pdfium char extraction → word grouping → pages of WordFragment
//! ```
//!
//! Scanned pages without a text layer come back as empty pages.

use anyhow::{Context, Result};
use pdfium_render::prelude::*;
use tracing::{debug, warn};

use super::words::{group_words, PdfChar};
use crate::layout::WordFragment;

/// Extract words with positions from every page of a PDF.
#[allow(deprecated)] // PdfRect field access deprecated in 0.8.28, removed in 0.9.0
pub fn extract_word_pages(bytes: &[u8]) -> Result<Vec<Vec<WordFragment>>> {
    let pdfium = Pdfium::default();
    let doc = pdfium
        .load_pdf_from_byte_slice(bytes, None)
        .context("Failed to parse PDF")?;

    let mut pages = Vec::new();
    for (page_idx, page) in doc.pages().iter().enumerate() {
        let text = page.text().context("Failed to extract text from page")?;

        let mut chars = Vec::new();
        for ch in text.chars().iter() {
            if let (Some(unicode_ch), Ok(rect)) = (ch.unicode_char(), ch.tight_bounds()) {
                chars.push(PdfChar {
                    ch: unicode_ch,
                    left: rect.left.value,
                    right: rect.right.value,
                    bottom: rect.bottom.value,
                    top: rect.top.value,
                });
            }
        }

        let words = group_words(&chars, page.height().value);
        if words.is_empty() {
            warn!(page = page_idx, "No text layer on page");
        }
        debug!(page = page_idx, chars = chars.len(), words = words.len(), "Extracted page");
        pages.push(words);
    }

    Ok(pages)
}
