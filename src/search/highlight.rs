//! Structured match highlighting.
//!
//! The matcher returns highlights as `(text, matched)` spans over the
//! original text instead of pre-rendered markup, so record content can
//! never inject markup and the presentation layer decides how to render
//! emphasis. Spans always concatenate back to the input text exactly,
//! with case preserved.

use serde::Serialize;

/// A contiguous run of text, flagged as matching a query term or not.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HighlightSpan {
    /// The run of original text, case preserved
    pub text: String,

    /// Whether this run matched one or more query terms
    pub matched: bool,
}

impl HighlightSpan {
    fn new(text: &str, matched: bool) -> Self {
        Self {
            text: text.to_string(),
            matched,
        }
    }
}

/// Split `text` into spans, marking every case-insensitive occurrence of
/// any term. Terms are expected lower-cased (the tokenizer's output).
///
/// Overlapping or adjacent occurrences merge into a single matched span.
pub fn highlight(text: &str, terms: &[String]) -> Vec<HighlightSpan> {
    if text.is_empty() {
        return Vec::new();
    }

    let ranges = find_term_ranges(text, terms);
    if ranges.is_empty() {
        return vec![HighlightSpan::new(text, false)];
    }

    let mut spans = Vec::new();
    let mut cursor = 0;
    for (start, end) in ranges {
        if start > cursor {
            spans.push(HighlightSpan::new(&text[cursor..start], false));
        }
        spans.push(HighlightSpan::new(&text[start..end], true));
        cursor = end;
    }
    if cursor < text.len() {
        spans.push(HighlightSpan::new(&text[cursor..], false));
    }
    spans
}

/// Reassemble the plain text a span list was produced from.
pub fn plain_text(spans: &[HighlightSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

/// Byte ranges of all term occurrences, sorted and merged.
fn find_term_ranges(text: &str, terms: &[String]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    for term in terms {
        if term.is_empty() {
            continue;
        }
        let term_chars: Vec<char> = term.chars().collect();
        for (start, _) in text.char_indices() {
            if let Some(end) = match_at(text, start, &term_chars) {
                ranges.push((start, end));
            }
        }
    }

    ranges.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Try to match `term_chars` at byte offset `start`, folding each text
/// character to lowercase. Returns the exclusive end offset on success.
///
/// Matching is char-wise rather than over a lowercased copy of the text,
/// because lowercasing can change byte lengths and would skew offsets.
fn match_at(text: &str, start: usize, term_chars: &[char]) -> Option<usize> {
    let mut ti = 0;
    for (offset, ch) in text[start..].char_indices() {
        if ti == term_chars.len() {
            return Some(start + offset);
        }
        for folded in ch.to_lowercase() {
            if ti >= term_chars.len() {
                // Term ends inside this character's lowercase expansion;
                // the match cannot end on a char boundary, so reject it.
                return None;
            }
            if folded != term_chars[ti] {
                return None;
            }
            ti += 1;
        }
    }
    (ti == term_chars.len()).then_some(text.len())
}
