//! Rule-based Penn Treebank part-of-speech tagger.
//!
//! Tagging runs in two passes per sentence: every token first gets a tag from
//! the lexicon or from its shape and suffix, then a small set of contextual
//! rules repairs the tags that depend on the neighbouring word.

use super::lexicon::{
    CLITICS, CLOSED_CLASS, ING_NOUNS, IRREGULAR_VERBS, KNOWN_ADJECTIVES, KNOWN_VERBS,
    PLURAL_SUBJECTS,
};
use super::ssplit::sentence_ranges;
use super::types::AnnotatedToken;

/// Tag every token in place. Sentence indices must already be assigned.
pub fn tag(tokens: &mut [AnnotatedToken]) {
    let mut open_quote = false;
    for range in sentence_ranges(tokens) {
        tag_sentence(&mut tokens[range], &mut open_quote);
    }
}

fn tag_sentence(tokens: &mut [AnnotatedToken], open_quote: &mut bool) {
    let mut first_word = true;
    for token in tokens.iter_mut() {
        token.pos_tag = initial_tag(&token.surface_text, first_word, open_quote).to_string();
        if token.pos_tag != "``" && token.pos_tag != "-LRB-" {
            first_word = false;
        }
    }
    apply_context_rules(tokens);
}

fn initial_tag(word: &str, sentence_initial: bool, open_quote: &mut bool) -> &'static str {
    if let Some(tag) = punctuation_tag(word, open_quote) {
        return tag;
    }

    let lower = word.to_lowercase();

    if let Some(&(tag, _)) = CLITICS.get(lower.as_str()) {
        return tag;
    }
    if lower == "'s" || lower == "’s" {
        // possessive unless it follows a pronoun; fixed up in context
        return "POS";
    }
    if let Some(&tag) = CLOSED_CLASS.get(lower.as_str()) {
        return tag;
    }
    if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return "CD";
    }
    if let Some(&(_, tag)) = IRREGULAR_VERBS.get(lower.as_str()) {
        return tag;
    }
    if KNOWN_VERBS.contains(lower.as_str()) {
        return "VB";
    }
    if KNOWN_ADJECTIVES.contains(lower.as_str()) {
        return "JJ";
    }

    let capitalized = word.chars().next().is_some_and(char::is_uppercase);
    if capitalized && !sentence_initial {
        return "NNP";
    }
    if word.ends_with('.') {
        // abbreviations that kept their period: Mr. Dr. etc.
        return if lower == "etc." { "FW" } else { "NNP" };
    }

    match suffix_tag(&lower) {
        Some(tag) => tag,
        None if capitalized => "NNP",
        None => "NN",
    }
}

fn punctuation_tag(word: &str, open_quote: &mut bool) -> Option<&'static str> {
    let tag = match word {
        "." | "!" | "?" | "..." => ".",
        "," => ",",
        ":" | ";" | "--" | "-" => ":",
        "(" | "[" | "{" => "-LRB-",
        ")" | "]" | "}" => "-RRB-",
        "“" | "`" => "``",
        "”" | "'" | "’" => "''",
        "\"" => {
            *open_quote = !*open_quote;
            if *open_quote {
                "``"
            } else {
                "''"
            }
        }
        "$" => "$",
        "#" => "#",
        "%" => "NN",
        _ if word.chars().all(|c| !c.is_alphanumeric()) => "SYM",
        _ => return None,
    };
    Some(tag)
}

/// Open-class guess from word shape. Returns `None` when nothing matched.
fn suffix_tag(lower: &str) -> Option<&'static str> {
    if lower.contains('-') {
        return Some(if lower.ends_with('s') && !lower.ends_with("ss") {
            "NNS"
        } else {
            "JJ"
        });
    }
    if ING_NOUNS.contains(lower) {
        return Some("NN");
    }
    let len = lower.len();
    if len > 5 && lower.ends_with("ing") {
        return Some("VBG");
    }
    if len > 4 && lower.ends_with("ed") {
        return Some("VBD");
    }
    if len > 4 && lower.ends_with("ly") {
        return Some("RB");
    }
    if let Some(tag) = comparative_tag(lower) {
        return Some(tag);
    }
    const ADJECTIVE_SUFFIXES: &[&str] = &[
        "ous", "ful", "ive", "able", "ible", "less", "ish", "ical", "ic", "al",
    ];
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Some("JJ");
    }
    if len > 3
        && lower.ends_with('s')
        && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s))
    {
        return Some("NNS");
    }
    const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ment", "ness", "ity", "ism", "ist", "er"];
    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Some("NN");
    }
    None
}

/// `JJR`/`JJS` when stripping `-er`/`-est` leads back to a known adjective.
fn comparative_tag(lower: &str) -> Option<&'static str> {
    for (suffix, tag) in [("est", "JJS"), ("er", "JJR")] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            if super::lemma::adjective_base(stem).is_some() {
                return Some(tag);
            }
        }
    }
    None
}

fn apply_context_rules(tokens: &mut [AnnotatedToken]) {
    for i in 1..tokens.len() {
        let (before, rest) = tokens.split_at_mut(i);
        let prev = &before[i - 1];
        let current = &mut rest[0];
        let prev_tag = prev.pos_tag.as_str();
        let prev_lower = prev.surface_text.to_lowercase();
        let lower = current.surface_text.to_lowercase();

        let repaired = match current.pos_tag.as_str() {
            "POS" if prev_tag == "PRP" || prev_tag == "EX" || prev_tag == "WP" => Some("VBZ"),
            "VB" | "VBP" | "NN" | "JJ" if prev_tag == "MD" || prev_tag == "TO" => {
                if KNOWN_VERBS.contains(lower.as_str()) || current.pos_tag.starts_with("VB") {
                    Some("VB")
                } else {
                    None
                }
            }
            "VB" if is_nominal_context(prev_tag) => Some("NN"),
            "VBG" | "VBD" if matches!(prev_tag, "DT" | "PRP$" | "POS") => {
                Some(if current.pos_tag == "VBG" { "NN" } else { "JJ" })
            }
            "VBD" if is_auxiliary(&prev_lower) => Some("VBN"),
            "VB" if takes_plural_verb(prev_tag, &prev_lower) => Some("VBP"),
            "VB" if is_subject(prev_tag) => Some("VBP"),
            "NNS" if is_singular_subject(prev_tag, &prev_lower) && is_verb_s_form(&lower) => {
                Some("VBZ")
            }
            _ => None,
        };

        if let Some(tag) = repaired {
            current.pos_tag = tag.to_string();
        }
    }
}

fn is_nominal_context(prev_tag: &str) -> bool {
    matches!(prev_tag, "DT" | "JJ" | "JJR" | "JJS" | "PRP$" | "POS" | "CD" | "IN")
}

fn is_auxiliary(prev_lower: &str) -> bool {
    matches!(
        prev_lower,
        "have" | "has" | "had" | "having" | "be" | "been" | "being" | "is" | "are" | "was"
            | "were" | "am" | "'ve" | "'s" | "'re" | "'m"
    )
}

fn is_subject(prev_tag: &str) -> bool {
    matches!(prev_tag, "NN" | "NNS" | "NNP" | "NNPS" | "WDT" | "WP")
}

fn takes_plural_verb(prev_tag: &str, prev_lower: &str) -> bool {
    prev_tag == "NNS" || (prev_tag == "PRP" && PLURAL_SUBJECTS.contains(prev_lower))
}

fn is_singular_subject(prev_tag: &str, prev_lower: &str) -> bool {
    matches!(prev_tag, "NN" | "NNP" | "WDT" | "WP")
        || (prev_tag == "PRP" && matches!(prev_lower, "he" | "she" | "it"))
}

/// Third-person singular of a known verb: `sleeps`, `watches`, `tries`.
fn is_verb_s_form(lower: &str) -> bool {
    let candidates = [
        lower.strip_suffix("ies").map(|s| format!("{s}y")),
        lower.strip_suffix("es").map(str::to_string),
        lower.strip_suffix('s').map(str::to_string),
    ];
    candidates
        .into_iter()
        .flatten()
        .any(|stem| KNOWN_VERBS.contains(stem.as_str()))
}
