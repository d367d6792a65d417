//! Normalized term sets.

use std::collections::BTreeSet;

use serde::Serialize;

/// Part-of-speech tags treated as nouns, matched case-insensitively.
pub const NOUN_TAGS: [&str; 4] = ["NN", "NNS", "NNP", "NNPS"];

/// Whether `tag` is one of [`NOUN_TAGS`], ignoring case.
pub fn is_noun_tag(tag: &str) -> bool {
    NOUN_TAGS.iter().any(|noun| noun.eq_ignore_ascii_case(tag))
}

/// Fold a term to its normalized form.
///
/// Uses the Unicode default lowercase mapping, which is the same on every
/// platform and never consults the process locale.
pub fn normalize(term: &str) -> String {
    term.to_lowercase()
}

/// A distinct, lowercase set of terms, iterated in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermSet {
    terms: BTreeSet<String>,
}

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and insert a term. Returns `false` if it was already present.
    pub fn insert(&mut self, term: &str) -> bool {
        self.terms.insert(normalize(term))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether every term here also appears in `other`.
    pub fn is_subset(&self, other: &TermSet) -> bool {
        self.terms.is_subset(&other.terms)
    }

    /// Consume the set into a sorted vector.
    pub fn into_sorted_vec(self) -> Vec<String> {
        self.terms.into_iter().collect()
    }
}

impl<'a> FromIterator<&'a str> for TermSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = TermSet::new();
        for term in iter {
            set.insert(term);
        }
        set
    }
}
