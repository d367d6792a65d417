//! Types shared between the annotation engine and its consumers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A named processing stage of the annotation engine.
///
/// Stages run in the order they are configured and may read the output of
/// earlier stages, so each one declares what it needs to have run first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Annotator {
    /// Split text into tokens.
    Tokenize,
    /// Group tokens into sentences.
    Ssplit,
    /// Assign Penn Treebank part-of-speech tags.
    Pos,
    /// Assign dictionary forms.
    Lemma,
}

impl Annotator {
    pub const ALL: [Annotator; 4] = [
        Annotator::Tokenize,
        Annotator::Ssplit,
        Annotator::Pos,
        Annotator::Lemma,
    ];

    /// Returns the name used in pipeline configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tokenize => "tokenize",
            Self::Ssplit => "ssplit",
            Self::Pos => "pos",
            Self::Lemma => "lemma",
        }
    }

    /// Stages that must appear earlier in the same pipeline.
    pub fn requires(&self) -> &'static [Annotator] {
        match self {
            Self::Tokenize => &[],
            Self::Ssplit => &[Annotator::Tokenize],
            Self::Pos => &[Annotator::Tokenize, Annotator::Ssplit],
            Self::Lemma => &[Annotator::Tokenize, Annotator::Ssplit, Annotator::Pos],
        }
    }
}

impl fmt::Display for Annotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Annotator {
    type Err = AnnotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Annotator::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| AnnotationError::UnknownAnnotator(s.to_string()))
    }
}

/// A single token with everything the engine knows about it.
///
/// `lemma` and `pos_tag` stay empty when the corresponding annotator did not
/// run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedToken {
    /// Exact span of the input text covered by this token.
    pub surface_text: String,
    pub lemma: String,
    pub pos_tag: String,
    /// Sentence index, `0` for every token if sentences were not split.
    pub sentence: usize,
    /// Byte offset of the first character in the input text.
    pub start: usize,
    /// Byte offset one past the last character in the input text.
    pub end: usize,
}

impl AnnotatedToken {
    pub fn new(surface_text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            surface_text: surface_text.into(),
            lemma: String::new(),
            pos_tag: String::new(),
            sentence: 0,
            start,
            end,
        }
    }

    /// Build a fully annotated token without offsets. Handy for tests and
    /// for engines that do not track source positions.
    pub fn annotated(
        surface_text: impl Into<String>,
        lemma: impl Into<String>,
        pos_tag: impl Into<String>,
    ) -> Self {
        Self {
            surface_text: surface_text.into(),
            lemma: lemma.into(),
            pos_tag: pos_tag.into(),
            sentence: 0,
            start: 0,
            end: 0,
        }
    }
}

/// Ordered tokens produced by one annotation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedDocument {
    tokens: Vec<AnnotatedToken>,
}

impl AnnotatedDocument {
    pub fn new(tokens: Vec<AnnotatedToken>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of sentences, `0` for an empty document.
    pub fn sentence_count(&self) -> usize {
        self.tokens.last().map(|t| t.sentence + 1).unwrap_or(0)
    }
}

/// Errors from building or running an annotation pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("no annotators configured")]
    EmptyPipeline,

    #[error("unknown annotator '{0}' (expected one of: tokenize, ssplit, pos, lemma)")]
    UnknownAnnotator(String),

    #[error("annotator '{annotator}' requires '{requires}' to run before it")]
    MissingRequirement {
        annotator: Annotator,
        requires: Annotator,
    },

    #[error("annotation failed: {0}")]
    Failed(String),
}
