//! Penn-Treebank-flavored tokenizer.
//!
//! Every token's surface text is an exact slice of the input, so offsets can
//! always be mapped back to the source.

use std::sync::LazyLock;

use regex::Regex;

use super::lexicon::ABBREVIATIONS;
use super::types::AnnotatedToken;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
          (?:\p{L}\.){2,}                          # acronyms: U.S.
        | \d+(?:[.,]\d+)+                          # numbers with separators: 3.14, 1,000
        | [\p{L}\p{M}\p{N}]+(?:['’\-][\p{L}\p{M}\p{N}]+)*   # words, with inner hyphens/apostrophes
        | \.\.\.                                   # ellipsis
        | --                                       # dash
        | \S                                       # any other single character
        ",
    )
    .expect("token pattern should compile")
});

/// Clitics split off the end of a word, longest first.
const CLITIC_SUFFIXES: &[&str] = &["s", "re", "ve", "ll", "d", "m"];

/// Split `text` into tokens carrying surface text and byte offsets.
pub fn tokenize(text: &str) -> Vec<AnnotatedToken> {
    let spans: Vec<(usize, usize)> = TOKEN_PATTERN
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut tokens = Vec::with_capacity(spans.len());
    let mut i = 0;
    while i < spans.len() {
        let (start, mut end) = spans[i];

        // Title abbreviations keep their period: "Mr." "etc."
        if let Some(&(next_start, next_end)) = spans.get(i + 1) {
            if next_start == end
                && &text[next_start..next_end] == "."
                && ABBREVIATIONS.contains(text[start..end].to_lowercase().as_str())
            {
                end = next_end;
                i += 1;
            }
        }

        for (s, e) in split_clitic(text, start, end) {
            tokens.push(AnnotatedToken::new(&text[s..e], s, e));
        }
        i += 1;
    }

    tracing::trace!("tokenized {} bytes into {} tokens", text.len(), tokens.len());
    tokens
}

/// Split a contraction like `don't` or `cat's` into word + clitic spans.
fn split_clitic(text: &str, start: usize, end: usize) -> Vec<(usize, usize)> {
    let word = &text[start..end];
    let lower = word.to_lowercase();

    // byte offsets into `lower` only line up with `word` when lowercasing kept the length
    if lower.len() == word.len() {
        let tail = ["n't", "n’t"]
            .into_iter()
            .find(|t| lower.ends_with(*t))
            .map(str::len);
        if let Some(tail) = tail.filter(|&tail| lower.len() > tail) {
            let split = end - tail;
            return vec![(start, split), (split, end)];
        }

        if let Some(pos) = lower.rfind(['\'', '’']) {
            let apostrophe_len = lower[pos..].chars().next().map(char::len_utf8).unwrap_or(1);
            let suffix = &lower[pos + apostrophe_len..];
            if pos > 0 && CLITIC_SUFFIXES.contains(&suffix) {
                let split = start + pos;
                return vec![(start, split), (split, end)];
            }
        }
    }

    vec![(start, end)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surfaces(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.surface_text).collect()
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(surfaces("The cats sleep."), vec!["The", "cats", "sleep", "."]);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_surface_matches_source_span() {
        let text = "  Dr. Smith didn't pay $3.50 for the U.S. map, did he?";
        for token in tokenize(text) {
            assert_eq!(&text[token.start..token.end], token.surface_text);
        }
    }

    #[test]
    fn test_contractions() {
        assert_eq!(surfaces("don't"), vec!["do", "n't"]);
        assert_eq!(surfaces("can't"), vec!["ca", "n't"]);
        assert_eq!(surfaces("The cat's toy"), vec!["The", "cat", "'s", "toy"]);
        assert_eq!(surfaces("they're here"), vec!["they", "'re", "here"]);
        assert_eq!(surfaces("I'm"), vec!["I", "'m"]);
    }

    #[test]
    fn test_bare_clitics_are_not_split() {
        assert_eq!(surfaces("n’t"), vec!["n’t"]);
        assert_eq!(surfaces("n't"), vec!["n't"]);
        assert_eq!(surfaces("won’t"), vec!["wo", "n’t"]);
        for text in ["n’t", "I said n’t loudly", "’s", "'s"] {
            assert!(
                tokenize(text).iter().all(|t| !t.surface_text.is_empty()),
                "empty token in {:?}",
                text
            );
        }
    }

    #[test]
    fn test_inner_apostrophe_kept() {
        assert_eq!(surfaces("o'clock"), vec!["o'clock"]);
    }

    #[test]
    fn test_abbreviations_and_acronyms() {
        assert_eq!(surfaces("Mr. Jones"), vec!["Mr.", "Jones"]);
        assert_eq!(surfaces("the U.S. army"), vec!["the", "U.S.", "army"]);
        assert_eq!(surfaces("end. Start"), vec!["end", ".", "Start"]);
    }

    #[test]
    fn test_numbers_and_hyphens() {
        assert_eq!(surfaces("1,000 well-known 3.14"), vec!["1,000", "well-known", "3.14"]);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            surfaces("Wait... (really)?"),
            vec!["Wait", "...", "(", "really", ")", "?"]
        );
    }
}
