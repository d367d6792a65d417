//! Sentence splitting over an already tokenized stream.

use super::types::AnnotatedToken;

const TERMINATORS: &[&str] = &[".", "!", "?", "..."];
const CLOSERS: &[&str] = &["\"", "'", ")", "]", "}", "”", "’"];

/// Assign a sentence index to every token.
///
/// A sentence ends after a terminator; runs of terminators (`?!`) and the
/// closing quotes or brackets right after them stay in the same sentence.
pub fn split_sentences(tokens: &mut [AnnotatedToken]) {
    let mut sentence = 0;
    let mut pending_break = false;

    for token in tokens.iter_mut() {
        let text = token.surface_text.as_str();
        if pending_break && !TERMINATORS.contains(&text) && !CLOSERS.contains(&text) {
            sentence += 1;
            pending_break = false;
        }
        token.sentence = sentence;
        if TERMINATORS.contains(&text) {
            pending_break = true;
        }
    }
}

/// Group consecutive tokens by sentence index.
pub fn sentence_ranges(tokens: &[AnnotatedToken]) -> Vec<std::ops::Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for i in 1..=tokens.len() {
        if i == tokens.len() || tokens[i].sentence != tokens[start].sentence {
            ranges.push(start..i);
            start = i;
        }
    }
    ranges
}
