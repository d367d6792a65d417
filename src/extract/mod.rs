//! Term extraction: strategies, their registry, and the pipeline dispatcher.

mod dispatcher;
pub mod registry;
mod strategies;
mod terms;

pub use dispatcher::run;
pub use registry::{lookup, names, ExtractionStrategy};
pub use strategies::{extract_lemmas, extract_nouns, extract_tokens};
pub use terms::{is_noun_tag, normalize, TermSet, NOUN_TAGS};
