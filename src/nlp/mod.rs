//! Annotation engine: turns raw text into tokens with tags and lemmas.
//!
//! The `AnnotationEngine` trait is the only thing the extraction core
//! depends on. `RuleBasedEngine` is the built-in English implementation:
//! a regex tokenizer, a terminator-based sentence splitter, a lexicon and
//! suffix driven Penn Treebank tagger, and a tag-aware lemmatizer.

mod engine;
mod lemma;
mod lexicon;
mod pos;
mod ssplit;
mod tokenizer;
mod types;

pub use engine::{AnnotationEngine, AnnotatorChain, RuleBasedEngine};
pub use lemma::lemmatize;
pub use types::{AnnotatedDocument, AnnotatedToken, AnnotationError, Annotator};
