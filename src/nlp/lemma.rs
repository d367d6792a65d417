//! Dictionary-form assignment driven by part-of-speech tags.

use super::lexicon::{
    CLITICS, INVARIANT_NOUNS, IRREGULAR_ADJECTIVES, IRREGULAR_NOUNS, IRREGULAR_VERBS,
    KNOWN_ADJECTIVES, KNOWN_VERBS, PRONOUN_LEMMAS, SILENT_E_ENDINGS,
};
use super::types::AnnotatedToken;

/// Assign a lemma to every token in place. Tags must already be assigned.
pub fn lemmatize_tokens(tokens: &mut [AnnotatedToken]) {
    for token in tokens.iter_mut() {
        token.lemma = lemmatize(&token.surface_text, &token.pos_tag);
    }
}

/// Lemma of a single word given its Penn Treebank tag.
pub fn lemmatize(word: &str, tag: &str) -> String {
    if matches!(tag, "NNP" | "NNPS") {
        return word.to_string();
    }

    let lower = word.to_lowercase();
    if let Some(&(_, lemma)) = CLITICS.get(lower.as_str()) {
        return lemma.to_string();
    }

    match tag {
        "NNS" => noun_singular(&lower),
        "VB" | "VBP" | "VBZ" | "VBD" | "VBN" | "VBG" => verb_base(&lower, tag),
        "JJR" | "JJS" | "RBR" | "RBS" => comparative_base(&lower),
        "PRP" => PRONOUN_LEMMAS
            .get(lower.as_str())
            .map(|l| l.to_string())
            .unwrap_or(lower),
        "MD" => match lower.as_str() {
            "ca" => "can".to_string(),
            "wo" => "will".to_string(),
            _ => lower,
        },
        _ => lower,
    }
}

fn noun_singular(lower: &str) -> String {
    if let Some(singular) = IRREGULAR_NOUNS.get(lower) {
        return singular.to_string();
    }
    if INVARIANT_NOUNS.contains(lower) {
        return lower.to_string();
    }
    strip_plural_s(lower)
}

/// Shared `-s` stripping for plural nouns and third-person verbs.
fn strip_plural_s(lower: &str) -> String {
    if lower.len() > 4 {
        if let Some(stem) = lower.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    for sibilant in ["sses", "shes", "ches", "xes", "zzes", "oes"] {
        if lower.ends_with(sibilant) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return lower.to_string();
    }
    lower.strip_suffix('s').unwrap_or(lower).to_string()
}

fn verb_base(lower: &str, tag: &str) -> String {
    if let Some(&(lemma, _)) = IRREGULAR_VERBS.get(lower) {
        return lemma.to_string();
    }
    match tag {
        "VBZ" => {
            let stem = strip_plural_s(lower);
            if KNOWN_VERBS.contains(stem.as_str()) {
                stem
            } else {
                // "aches" -> "ach" misses; retry keeping the e
                lower
                    .strip_suffix('s')
                    .filter(|s| KNOWN_VERBS.contains(*s))
                    .map(str::to_string)
                    .unwrap_or(stem)
            }
        }
        "VBG" => match lower.strip_suffix("ing") {
            Some(stem) if !stem.is_empty() => {
                resolve_stem(stem, &KNOWN_VERBS, true).unwrap_or_else(|| guess_stem(stem))
            }
            _ => lower.to_string(),
        },
        "VBD" | "VBN" => {
            if let Some(stem) = lower.strip_suffix("ied") {
                return format!("{stem}y");
            }
            match lower.strip_suffix("ed") {
                Some(stem) if !stem.is_empty() => {
                    resolve_stem(stem, &KNOWN_VERBS, false).unwrap_or_else(|| guess_stem(stem))
                }
                _ => lower.to_string(),
            }
        }
        _ => lower.to_string(),
    }
}

fn comparative_base(lower: &str) -> String {
    if let Some(base) = IRREGULAR_ADJECTIVES.get(lower) {
        return base.to_string();
    }
    for suffix in ["est", "er"] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            if let Some(base) = adjective_base(stem) {
                return base;
            }
        }
    }
    lower.to_string()
}

/// Base adjective for the stem left after removing `-er`/`-est`, if the
/// stem leads back to a known adjective (`bigg` -> `big`, `happi` -> `happy`).
pub(crate) fn adjective_base(stem: &str) -> Option<String> {
    if stem.is_empty() {
        return None;
    }
    if let Some(root) = stem.strip_suffix('i') {
        let candidate = format!("{root}y");
        if KNOWN_ADJECTIVES.contains(candidate.as_str()) {
            return Some(candidate);
        }
    }
    resolve_stem(stem, &KNOWN_ADJECTIVES, false)
}

/// Pick the spelling of `stem` found in `known`: as is, with a doubled final
/// consonant removed, or with a silent `e` restored. `ie` is tried for
/// `-ing` forms (`lying` -> `lie`).
fn resolve_stem(
    stem: &str,
    known: &std::collections::HashSet<&'static str>,
    ing_form: bool,
) -> Option<String> {
    if known.contains(stem) {
        return Some(stem.to_string());
    }
    if let Some(undoubled) = undouble(stem) {
        if known.contains(undoubled) {
            return Some(undoubled.to_string());
        }
    }
    let with_e = format!("{stem}e");
    if known.contains(with_e.as_str()) {
        return Some(with_e);
    }
    if ing_form {
        if let Some(root) = stem.strip_suffix('y') {
            let with_ie = format!("{root}ie");
            if known.contains(with_ie.as_str()) {
                return Some(with_ie);
            }
        }
    }
    None
}

/// Spelling heuristics for verbs missing from the lexicon.
fn guess_stem(stem: &str) -> String {
    if SILENT_E_ENDINGS.iter().any(|e| stem.ends_with(e)) {
        return format!("{stem}e");
    }
    match undouble(stem) {
        Some(undoubled) => undoubled.to_string(),
        None => stem.to_string(),
    }
}

/// `stopp` -> `stop`; keeps `ll`, `ss`, `zz`, `ff` which are usually part of
/// the root (`call`, `miss`).
fn undouble(stem: &str) -> Option<&str> {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n < 3 || bytes[n - 1] != bytes[n - 2] {
        return None;
    }
    let last = bytes[n - 1];
    if !last.is_ascii_alphabetic() || b"aeiouylsfz".contains(&last) {
        return None;
    }
    Some(&stem[..n - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_nouns() {
        assert_eq!(lemmatize("cats", "NNS"), "cat");
        assert_eq!(lemmatize("cities", "NNS"), "city");
        assert_eq!(lemmatize("boxes", "NNS"), "box");
        assert_eq!(lemmatize("churches", "NNS"), "church");
        assert_eq!(lemmatize("houses", "NNS"), "house");
        assert_eq!(lemmatize("Children", "NNS"), "child");
        assert_eq!(lemmatize("wolves", "NNS"), "wolf");
        assert_eq!(lemmatize("species", "NNS"), "species");
    }

    #[test]
    fn test_irregular_verbs() {
        assert_eq!(lemmatize("ran", "VBD"), "run");
        assert_eq!(lemmatize("was", "VBD"), "be");
        assert_eq!(lemmatize("Is", "VBZ"), "be");
        assert_eq!(lemmatize("written", "VBN"), "write");
    }

    #[test]
    fn test_regular_verbs() {
        assert_eq!(lemmatize("running", "VBG"), "run");
        assert_eq!(lemmatize("making", "VBG"), "make");
        assert_eq!(lemmatize("lying", "VBG"), "lie");
        assert_eq!(lemmatize("calling", "VBG"), "call");
        assert_eq!(lemmatize("walked", "VBD"), "walk");
        assert_eq!(lemmatize("stopped", "VBN"), "stop");
        assert_eq!(lemmatize("tried", "VBD"), "try");
        assert_eq!(lemmatize("chases", "VBZ"), "chase");
        assert_eq!(lemmatize("watches", "VBZ"), "watch");
        assert_eq!(lemmatize("sleeps", "VBZ"), "sleep");
    }

    #[test]
    fn test_unknown_verbs_use_spelling_heuristics() {
        assert_eq!(lemmatize("translated", "VBD"), "translate");
        assert_eq!(lemmatize("grabbed", "VBD"), "grab");
        assert_eq!(lemmatize("jumping", "VBG"), "jump");
    }

    #[test]
    fn test_comparatives() {
        assert_eq!(lemmatize("bigger", "JJR"), "big");
        assert_eq!(lemmatize("happiest", "JJS"), "happy");
        assert_eq!(lemmatize("larger", "JJR"), "large");
        assert_eq!(lemmatize("better", "JJR"), "good");
    }

    #[test]
    fn test_proper_nouns_keep_surface() {
        assert_eq!(lemmatize("Paris", "NNP"), "Paris");
    }

    #[test]
    fn test_pronouns_and_clitics() {
        assert_eq!(lemmatize("them", "PRP"), "they");
        assert_eq!(lemmatize("n't", "RB"), "not");
        assert_eq!(lemmatize("'re", "VBP"), "be");
        assert_eq!(lemmatize("ca", "MD"), "can");
    }

    #[test]
    fn test_other_tags_lowercase() {
        assert_eq!(lemmatize("The", "DT"), "the");
        assert_eq!(lemmatize("Quickly", "RB"), "quickly");
    }

    #[test]
    fn test_adjective_base() {
        assert_eq!(adjective_base("bigg").as_deref(), Some("big"));
        assert_eq!(adjective_base("teach"), None);
        assert_eq!(adjective_base(""), None);
    }
}
