//! CLI command implementations.

use std::path::Path;

use anyhow::Context;

use termex::config::{self, ConfigOutcome};
use termex::extract;
use termex::nlp::{AnnotationEngine, RuleBasedEngine};

/// Extract terms from `text` and print one per line.
pub fn cmd_extract_terms(
    text: &str,
    pipeline: &str,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let loaded = config::load(config_path).context("Failed to load configuration")?;
    match &loaded.outcome {
        ConfigOutcome::Loaded(path) => tracing::info!("Using configuration {}", path.display()),
        ConfigOutcome::Bundled => tracing::info!("Using bundled configuration"),
        ConfigOutcome::FallbackToBundled(_) => {}
    }

    let engine = RuleBasedEngine::new();
    tracing::debug!("Annotation engine: {}", engine.engine_id());

    let terms = extract::run(pipeline, text, &loaded.store, &engine)
        .with_context(|| format!("Pipeline '{}' failed", pipeline))?;
    for term in terms {
        println!("{}", term);
    }
    Ok(())
}

/// Print the registered extraction strategy names.
pub fn cmd_list_strategies() -> anyhow::Result<()> {
    for name in extract::names() {
        println!("{}", name);
    }
    Ok(())
}
