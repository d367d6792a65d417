//! Errors raised while resolving and running an extraction pipeline.

use thiserror::Error;

use crate::extract::registry;
use crate::nlp::{AnnotationError, Annotator};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("configuration key '{key}' is missing or empty")]
    ConfigurationMissing { key: String },

    #[error(
        "unknown extraction strategy '{0}' (expected one of: {})",
        registry::names().join(", ")
    )]
    UnknownStrategy(String),

    #[error("strategy '{strategy}' needs the '{annotator}' annotator, which the pipeline does not run")]
    MissingAnnotation {
        strategy: &'static str,
        annotator: Annotator,
    },

    #[error("annotation engine error")]
    Annotation(#[from] AnnotationError),
}

impl ExtractError {
    pub(crate) fn missing_key(key: impl Into<String>) -> Self {
        Self::ConfigurationMissing { key: key.into() }
    }
}
