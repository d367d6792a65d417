//! The three term extraction algorithms.
//!
//! Each one walks the document once, derives a string per token, filters,
//! and collects into a [`TermSet`], which lowercases and deduplicates.

use super::terms::{is_noun_tag, TermSet};
use crate::nlp::AnnotatedDocument;

/// Every distinct token surface form.
pub fn extract_tokens(doc: &AnnotatedDocument) -> TermSet {
    doc.tokens()
        .iter()
        .map(|t| t.surface_text.as_str())
        .collect()
}

/// Every distinct lemma.
pub fn extract_lemmas(doc: &AnnotatedDocument) -> TermSet {
    doc.tokens().iter().map(|t| t.lemma.as_str()).collect()
}

/// Surface forms of tokens tagged as nouns.
pub fn extract_nouns(doc: &AnnotatedDocument) -> TermSet {
    doc.tokens()
        .iter()
        .filter(|t| is_noun_tag(&t.pos_tag))
        .map(|t| t.surface_text.as_str())
        .collect()
}
