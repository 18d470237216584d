//! Character-to-word grouping for PDF text layers.
//!
//! PDF libraries report positioned characters in content-stream order with
//! bottom-up coordinates. Words end at whitespace, at a horizontal gap wider
//! than [`WORD_GAP`], or when the baseline jumps; each word is reported with
//! its left edge and its top measured down from the top of the page.

use crate::layout::WordFragment;

/// Horizontal gap (PDF points) that separates two words.
pub const WORD_GAP: f32 = 3.0;

/// A positioned character extracted from a PDF page.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfChar {
    pub ch: char,
    /// Left edge in PDF points (1pt = 1/72 inch).
    pub left: f32,
    pub right: f32,
    /// Bottom edge, bottom-up coordinate system.
    pub bottom: f32,
    /// Top edge, bottom-up coordinate system.
    pub top: f32,
}

impl PdfChar {
    fn height(&self) -> f32 {
        (self.top - self.bottom).abs()
    }
}

/// Word being accumulated.
struct Pending {
    text: String,
    x0: f32,
    /// Highest top edge so far, bottom-up.
    top: f32,
    last: PdfChar,
}

/// Group one page's characters into words.
pub fn group_words(chars: &[PdfChar], page_height: f32) -> Vec<WordFragment> {
    let mut words = Vec::new();
    let mut pending: Option<Pending> = None;

    for ch in chars {
        if ch.ch.is_whitespace() || ch.ch.is_control() {
            flush(&mut pending, page_height, &mut words);
            continue;
        }

        if let Some(word) = &pending {
            if starts_new_word(&word.last, ch) {
                flush(&mut pending, page_height, &mut words);
            }
        }

        match &mut pending {
            Some(word) => {
                word.text.push(ch.ch);
                word.x0 = word.x0.min(ch.left);
                word.top = word.top.max(ch.top);
                word.last = ch.clone();
            }
            None => {
                pending = Some(Pending {
                    text: ch.ch.to_string(),
                    x0: ch.left,
                    top: ch.top,
                    last: ch.clone(),
                });
            }
        }
    }

    flush(&mut pending, page_height, &mut words);
    words
}

fn starts_new_word(prev: &PdfChar, next: &PdfChar) -> bool {
    let baseline_jump = (next.bottom - prev.bottom).abs() > prev.height().max(next.height()) * 0.5;
    let gap = next.left - prev.right;
    baseline_jump || gap > WORD_GAP || next.right < prev.left
}

fn flush(pending: &mut Option<Pending>, page_height: f32, words: &mut Vec<WordFragment>) {
    if let Some(word) = pending.take() {
        words.push(WordFragment::new(
            word.text,
            f64::from(word.x0),
            f64::from(page_height - word.top),
        ));
    }
}
