//! Resolving a pipeline name to its annotators and extraction strategy.

use super::store::ConfigStore;
use crate::error::ExtractError;

/// Annotator sequence and strategy name for one pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Annotator names in the order they run.
    pub annotators: Vec<String>,
    /// Extraction strategy identifier, looked up in the registry.
    pub strategy: String,
}

impl PipelineConfig {
    /// Read `<name>.annotators` and `<name>.method` from `store`.
    ///
    /// The annotators value is split on commas; entries are trimmed and empty
    /// entries dropped. Missing or empty values fail with
    /// [`ExtractError::ConfigurationMissing`], annotators first.
    pub fn resolve(name: &str, store: &ConfigStore) -> Result<Self, ExtractError> {
        let annotators_key = format!("{name}.annotators");
        let method_key = format!("{name}.method");

        let annotators = store
            .get(&annotators_key)
            .map(parse_annotators)
            .ok_or_else(|| ExtractError::missing_key(annotators_key.as_str()))?;
        if annotators.is_empty() {
            return Err(ExtractError::missing_key(annotators_key));
        }

        let strategy = store
            .get(&method_key)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| ExtractError::missing_key(method_key.as_str()))?
            .to_string();

        Ok(Self {
            annotators,
            strategy,
        })
    }
}

fn parse_annotators(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
