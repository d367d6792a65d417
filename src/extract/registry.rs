//! Closed table of extraction strategies, looked up by configured name.

use super::strategies::{extract_lemmas, extract_nouns, extract_tokens};
use super::terms::TermSet;
use crate::error::ExtractError;
use crate::nlp::{AnnotatedDocument, Annotator};

/// A named extraction algorithm.
pub struct ExtractionStrategy {
    /// Identifier used as the `<pipeline>.method` value.
    pub name: &'static str,
    /// Annotation layer the algorithm reads beyond the token surface.
    pub requires: Option<Annotator>,
    extract: fn(&AnnotatedDocument) -> TermSet,
}

impl ExtractionStrategy {
    pub fn extract(&self, doc: &AnnotatedDocument) -> TermSet {
        (self.extract)(doc)
    }
}

static STRATEGIES: [ExtractionStrategy; 3] = [
    ExtractionStrategy {
        name: "extractTokens",
        requires: None,
        extract: extract_tokens,
    },
    ExtractionStrategy {
        name: "extractLemmas",
        requires: Some(Annotator::Lemma),
        extract: extract_lemmas,
    },
    ExtractionStrategy {
        name: "extractNouns",
        requires: Some(Annotator::Pos),
        extract: extract_nouns,
    },
];

/// Find a strategy by exact, case-sensitive name.
pub fn lookup(name: &str) -> Result<&'static ExtractionStrategy, ExtractError> {
    STRATEGIES
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| ExtractError::UnknownStrategy(name.to_string()))
}

/// Registered strategy names, in table order.
pub fn names() -> Vec<&'static str> {
    STRATEGIES.iter().map(|s| s.name).collect()
}
