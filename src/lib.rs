//! termex - configuration-driven term extraction.
//!
//! A named pipeline in the configuration picks the annotators to run over the
//! input text and the strategy that turns the annotated tokens into a set of
//! distinct, lowercase terms: surface tokens, lemmas, or nouns.

pub mod config;
pub mod error;
pub mod extract;
pub mod nlp;

pub use config::{ConfigStore, PipelineConfig};
pub use error::ExtractError;
pub use extract::{run, TermSet};
pub use nlp::{AnnotationEngine, RuleBasedEngine};
