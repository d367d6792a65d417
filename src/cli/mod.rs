//! Command-line interface.

mod commands;

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use commands::{cmd_extract_terms, cmd_list_strategies};

#[derive(Parser, Debug)]
#[command(name = "termex")]
#[command(about = "Extract distinct terms from text with a configured annotation pipeline")]
#[command(version)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["extract_terms", "list_strategies"])
))]
pub struct Cli {
    /// Extract terms from the given text
    #[arg(long, value_name = "TEXT", requires = "nlp_pipeline", allow_hyphen_values = true)]
    extract_terms: Option<String>,

    /// Configuration file (.properties, .toml, .json, .yaml)
    #[arg(long, value_name = "PATH", env = "TERMEX_CONFIG")]
    properties_file: Option<PathBuf>,

    /// Pipeline to run (tokens_pipeline, lemmas_pipeline, nouns_pipeline)
    #[arg(long, value_name = "NAME", env = "TERMEX_PIPELINE")]
    nlp_pipeline: Option<String>,

    /// List the available extraction strategies
    #[arg(long)]
    list_strategies: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Single-dash long flags accepted for compatibility, with their clap names.
const LEGACY_FLAGS: [(&str, &str); 3] = [
    ("-et", "--extract-terms"),
    ("-pf", "--properties-file"),
    ("-np", "--nlp-pipeline"),
];

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

/// Rewrite legacy `-et`/`-pf`/`-np` flags (and their `-flag=value` forms) to
/// the double-dash spellings. Option values and anything after `--` are left
/// untouched.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out = Vec::new();
    let mut expecting_value = false;
    let mut passthrough = false;

    for arg in args {
        if passthrough || expecting_value {
            expecting_value = false;
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let (flag, value) = match arg.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (arg.as_str(), None),
        };
        let long = LEGACY_FLAGS
            .iter()
            .find(|(legacy, _)| *legacy == flag)
            .map(|(_, long)| *long)
            .or_else(|| {
                LEGACY_FLAGS
                    .iter()
                    .map(|(_, long)| *long)
                    .find(|long| *long == flag)
            });

        let rewritten = match (long, value) {
            (Some(long), Some(value)) => format!("{long}={value}"),
            (Some(long), None) => {
                expecting_value = true;
                long.to_string()
            }
            (None, _) => arg,
        };
        out.push(rewritten);
    }

    out
}

impl Cli {
    /// Parse process arguments, exiting with usage on error (code 2) or
    /// after printing help or version (code 0).
    pub fn parse_args() -> Self {
        match Self::try_parse_from(normalize_args(std::env::args())) {
            Ok(cli) => cli,
            Err(e) => e.exit(),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    if cli.list_strategies {
        return cmd_list_strategies();
    }
    match (cli.extract_terms, cli.nlp_pipeline) {
        (Some(text), Some(pipeline)) => {
            cmd_extract_terms(&text, &pipeline, cli.properties_file.as_deref())
        }
        _ => anyhow::bail!("--extract-terms requires --nlp-pipeline"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn parse(list: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(normalize_args(args(list)))
    }

    #[test]
    fn test_normalize_legacy_flags() {
        assert_eq!(
            normalize_args(args(&["termex", "-et", "Dogs bark", "-np", "nouns_pipeline", "-pf", "a.toml"])),
            args(&[
                "termex",
                "--extract-terms",
                "Dogs bark",
                "--nlp-pipeline",
                "nouns_pipeline",
                "--properties-file",
                "a.toml",
            ])
        );
    }

    #[test]
    fn test_normalize_equals_form() {
        assert_eq!(
            normalize_args(args(&["termex", "-np=tokens_pipeline"])),
            args(&["termex", "--nlp-pipeline=tokens_pipeline"])
        );
    }

    #[test]
    fn test_normalize_leaves_values_alone() {
        assert_eq!(
            normalize_args(args(&["termex", "--extract-terms", "-np", "-np", "p"])),
            args(&["termex", "--extract-terms", "-np", "--nlp-pipeline", "p"])
        );
        assert_eq!(
            normalize_args(args(&["termex", "--", "-et"])),
            args(&["termex", "--", "-et"])
        );
    }

    #[test]
    fn test_parse_extract() {
        let cli = parse(&["termex", "-et", "The cats sleep", "-np", "tokens_pipeline", "-v"]).unwrap();
        assert_eq!(cli.extract_terms.as_deref(), Some("The cats sleep"));
        assert_eq!(cli.nlp_pipeline.as_deref(), Some("tokens_pipeline"));
        assert!(cli.verbose);
        assert!(!cli.list_strategies);
    }

    #[test]
    fn test_parse_text_starting_with_hyphen() {
        let cli = parse(&["termex", "-et", "-5 degrees outside", "-np", "tokens_pipeline"]).unwrap();
        assert_eq!(cli.extract_terms.as_deref(), Some("-5 degrees outside"));
        assert_eq!(cli.nlp_pipeline.as_deref(), Some("tokens_pipeline"));
    }

    #[test]
    fn test_parse_requires_action() {
        let err = parse(&["termex"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_parse_help() {
        let err = parse(&["termex", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_parse_list_strategies() {
        let cli = parse(&["termex", "--list-strategies"]).unwrap();
        assert!(cli.list_strategies);
    }

    #[test]
    fn test_actions_are_exclusive() {
        let err = parse(&[
            "termex",
            "--list-strategies",
            "--extract-terms",
            "x",
            "--nlp-pipeline",
            "p",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }
}
