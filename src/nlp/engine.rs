//! Annotation engine boundary and the built-in rule-based engine.

use super::types::{AnnotatedDocument, AnnotationError, Annotator};
use super::{lemma, pos, ssplit, tokenizer};

/// Something that can turn raw text into annotated tokens.
///
/// Implementations receive the annotator names exactly as configured and
/// decide for themselves which names they support. The built-in
/// `RuleBasedEngine` understands `tokenize`, `ssplit`, `pos` and `lemma`;
/// other engines can be swapped in behind this trait.
pub trait AnnotationEngine {
    /// Human-readable engine identifier (e.g. "rules").
    fn engine_id(&self) -> &str;

    /// Run the given annotators over `text`, in order.
    fn annotate(
        &self,
        text: &str,
        annotators: &[String],
    ) -> Result<AnnotatedDocument, AnnotationError>;
}

/// A validated, ordered sequence of annotators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorChain {
    stages: Vec<Annotator>,
}

impl AnnotatorChain {
    /// Parse and validate annotator names.
    ///
    /// Every stage's requirements must appear earlier in the list. Repeated
    /// names are ignored after their first occurrence.
    pub fn build<S: AsRef<str>>(names: &[S]) -> Result<Self, AnnotationError> {
        let mut stages: Vec<Annotator> = Vec::with_capacity(names.len());

        for name in names {
            let annotator: Annotator = name.as_ref().parse()?;
            if stages.contains(&annotator) {
                tracing::warn!("Annotator '{}' listed more than once, ignoring repeat", annotator);
                continue;
            }
            if let Some(missing) = annotator
                .requires()
                .iter()
                .find(|req| !stages.contains(*req))
            {
                return Err(AnnotationError::MissingRequirement {
                    annotator,
                    requires: *missing,
                });
            }
            stages.push(annotator);
        }

        if stages.is_empty() {
            return Err(AnnotationError::EmptyPipeline);
        }
        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[Annotator] {
        &self.stages
    }

    /// Run every stage over `text`.
    pub fn run(&self, text: &str) -> AnnotatedDocument {
        let mut tokens = Vec::new();
        for stage in &self.stages {
            match stage {
                Annotator::Tokenize => tokens = tokenizer::tokenize(text),
                Annotator::Ssplit => ssplit::split_sentences(&mut tokens),
                Annotator::Pos => pos::tag(&mut tokens),
                Annotator::Lemma => lemma::lemmatize_tokens(&mut tokens),
            }
            tracing::trace!("Annotator '{}' done ({} tokens)", stage, tokens.len());
        }
        AnnotatedDocument::new(tokens)
    }
}

/// Built-in English engine backed by lexicon tables and suffix rules.
///
/// Stateless: every call to [`AnnotationEngine::annotate`] builds a fresh
/// [`AnnotatorChain`] from the given names, so one engine value can serve
/// any number of pipelines.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedEngine;

impl RuleBasedEngine {
    pub fn new() -> Self {
        Self
    }
}

impl AnnotationEngine for RuleBasedEngine {
    fn engine_id(&self) -> &str {
        "rules"
    }

    fn annotate(
        &self,
        text: &str,
        annotators: &[String],
    ) -> Result<AnnotatedDocument, AnnotationError> {
        let chain = AnnotatorChain::build(annotators)?;
        tracing::debug!(
            "Running annotators [{}] over {} bytes",
            annotators.join(","),
            text.len()
        );
        Ok(chain.run(text))
    }
}
