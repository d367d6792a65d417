//! Runs a configured pipeline end to end.

use super::registry;
use crate::config::{ConfigStore, PipelineConfig};
use crate::error::ExtractError;
use crate::nlp::AnnotationEngine;

/// Extract terms from `text` using the pipeline named `pipeline_name`.
///
/// Resolves the pipeline from `store`, checks the strategy exists and that
/// the configured annotators produce the layer it reads, then annotates
/// `text` once and returns the distinct lowercase terms in sorted order.
pub fn run(
    pipeline_name: &str,
    text: &str,
    store: &ConfigStore,
    engine: &dyn AnnotationEngine,
) -> Result<Vec<String>, ExtractError> {
    let config = PipelineConfig::resolve(pipeline_name, store)?;
    tracing::debug!(
        "Pipeline '{}': annotators [{}], strategy '{}'",
        pipeline_name,
        config.annotators.join(","),
        config.strategy
    );

    let strategy = registry::lookup(&config.strategy)?;
    if let Some(layer) = strategy.requires {
        if !config.annotators.iter().any(|a| a == layer.as_str()) {
            return Err(ExtractError::MissingAnnotation {
                strategy: strategy.name,
                annotator: layer,
            });
        }
    }

    let doc = engine.annotate(text, &config.annotators)?;
    tracing::debug!(
        "Engine '{}' produced {} tokens in {} sentences",
        engine.engine_id(),
        doc.len(),
        doc.sentence_count()
    );

    let terms = strategy.extract(&doc);
    tracing::info!("Extracted {} distinct terms with {}", terms.len(), strategy.name);
    Ok(terms.into_sorted_vec())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::nlp::{AnnotatedDocument, AnnotatedToken, AnnotationError, RuleBasedEngine};

    /// Returns a fixed document and counts calls.
    struct FixedEngine {
        tokens: Vec<(&'static str, &'static str, &'static str)>,
        calls: Cell<usize>,
    }

    impl FixedEngine {
        fn cats_sleep() -> Self {
            Self {
                tokens: vec![
                    ("The", "the", "DT"),
                    ("cats", "cat", "NNS"),
                    ("sleep", "sleep", "VBP"),
                ],
                calls: Cell::new(0),
            }
        }
    }

    impl AnnotationEngine for FixedEngine {
        fn engine_id(&self) -> &str {
            "fixed"
        }

        fn annotate(
            &self,
            _text: &str,
            _annotators: &[String],
        ) -> Result<AnnotatedDocument, AnnotationError> {
            self.calls.set(self.calls.get() + 1);
            Ok(AnnotatedDocument::new(
                self.tokens
                    .iter()
                    .map(|(s, l, p)| AnnotatedToken::annotated(*s, *l, *p))
                    .collect(),
            ))
        }
    }

    struct FailingEngine;

    impl AnnotationEngine for FailingEngine {
        fn engine_id(&self) -> &str {
            "failing"
        }

        fn annotate(
            &self,
            _text: &str,
            _annotators: &[String],
        ) -> Result<AnnotatedDocument, AnnotationError> {
            Err(AnnotationError::Failed("model not loaded".to_string()))
        }
    }

    fn store(annotators: &str, method: &str) -> ConfigStore {
        let mut store = ConfigStore::new();
        store.set("p.annotators", annotators);
        store.set("p.method", method);
        store
    }

    #[test]
    fn test_runs_each_strategy() {
        let engine = FixedEngine::cats_sleep();
        let full = "tokenize,ssplit,pos,lemma";

        let cases = [
            ("extractTokens", vec!["cats", "sleep", "the"]),
            ("extractLemmas", vec!["cat", "sleep", "the"]),
            ("extractNouns", vec!["cats"]),
        ];
        for (method, expected) in cases {
            let terms = run("p", "The cats sleep", &store(full, method), &engine).unwrap();
            assert_eq!(terms, expected, "{}", method);
        }
        assert_eq!(engine.calls.get(), 3);
    }

    #[test]
    fn test_unknown_strategy_skips_annotation() {
        let engine = FixedEngine::cats_sleep();
        let err = run("p", "text", &store("tokenize", "extractVerbs"), &engine).unwrap_err();
        assert!(matches!(err, ExtractError::UnknownStrategy(ref n) if n == "extractVerbs"));
        assert_eq!(engine.calls.get(), 0);
    }

    #[test]
    fn test_missing_config_skips_annotation() {
        let engine = FixedEngine::cats_sleep();
        let err = run("other", "text", &store("tokenize", "extractTokens"), &engine).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::ConfigurationMissing { ref key } if key == "other.annotators"
        ));
        assert_eq!(engine.calls.get(), 0);
    }

    #[test]
    fn test_noun_pipeline_without_pos() {
        let engine = FixedEngine::cats_sleep();
        let err = run("p", "text", &store("tokenize,ssplit", "extractNouns"), &engine).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingAnnotation {
                strategy: "extractNouns",
                annotator: crate::nlp::Annotator::Pos,
            }
        ));
        assert_eq!(engine.calls.get(), 0);
    }

    #[test]
    fn test_lemma_pipeline_without_lemma() {
        let engine = FixedEngine::cats_sleep();
        let err = run("p", "text", &store("tokenize,ssplit,pos", "extractLemmas"), &engine)
            .unwrap_err();
        assert!(matches!(err, ExtractError::MissingAnnotation { strategy: "extractLemmas", .. }));
    }

    #[test]
    fn test_engine_failure_propagates() {
        let err = run("p", "text", &store("tokenize", "extractTokens"), &FailingEngine).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Annotation(AnnotationError::Failed(ref m)) if m == "model not loaded"
        ));
    }

    #[test]
    fn test_with_rule_based_engine() {
        let engine = RuleBasedEngine::new();
        let s = store("tokenize,ssplit,pos,lemma", "extractLemmas");
        let terms = run("p", "The cats sleep. The dog ran.", &s, &engine).unwrap();
        assert_eq!(terms, vec![".", "cat", "dog", "run", "sleep", "the"]);
    }

    #[test]
    fn test_empty_text() {
        let engine = RuleBasedEngine::new();
        let s = store("tokenize,ssplit,pos", "extractNouns");
        assert!(run("p", "", &s, &engine).unwrap().is_empty());
    }
}
