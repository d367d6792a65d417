//! Static English word lists used by the tagger and lemmatizer.
//!
//! All keys are lowercase. Tables are built once on first use and never
//! mutated afterwards.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

// ============================================================================
// Closed-class words
// ============================================================================

/// Words whose tag does not depend on suffix heuristics.
pub static CLOSED_CLASS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let groups: &[(&str, &[&str])] = &[
        (
            "DT",
            &[
                "the", "a", "an", "this", "that", "these", "those", "every", "each", "some",
                "any", "no", "another", "all", "both", "either", "neither",
            ],
        ),
        (
            "PRP",
            &[
                "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them",
                "myself", "yourself", "himself", "herself", "itself", "ourselves",
                "yourselves", "themselves",
            ],
        ),
        ("PRP$", &["my", "your", "his", "her", "its", "our", "their"]),
        ("WP", &["who", "whom", "what"]),
        ("WP$", &["whose"]),
        ("WDT", &["which"]),
        ("WRB", &["when", "where", "why", "how"]),
        (
            "IN",
            &[
                "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
                "through", "during", "before", "after", "above", "below", "from", "of", "off",
                "over", "under", "since", "until", "upon", "within", "without", "among",
                "across", "behind", "beyond", "near", "because", "although", "though",
                "while", "if", "whether", "than", "as", "per", "via", "toward", "towards",
            ],
        ),
        ("TO", &["to"]),
        ("CC", &["and", "or", "but", "nor", "yet", "plus"]),
        (
            "MD",
            &[
                "can", "could", "will", "would", "shall", "should", "may", "might", "must",
                "ca", "wo",
            ],
        ),
        ("EX", &["there"]),
        (
            "RB",
            &[
                "not", "very", "also", "too", "just", "only", "never", "always", "often",
                "now", "then", "here", "so", "quite", "rather", "already", "still", "even",
                "again", "soon", "perhaps", "really", "almost", "ever", "away", "yesterday",
                "today", "tomorrow", "once", "twice",
            ],
        ),
        ("RP", &["up", "down", "out"]),
        ("UH", &["oh", "yes", "hello", "hey", "wow", "ok", "okay"]),
        (
            "CD",
            &[
                "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
                "ten", "eleven", "twelve", "twenty", "hundred", "thousand", "million",
                "billion",
            ],
        ),
        ("VB", &["be"]),
        ("VBZ", &["is", "has", "does"]),
        ("VBP", &["are", "am", "have", "do"]),
        ("VBD", &["was", "were", "had", "did"]),
        ("VBN", &["been"]),
        ("VBG", &["being", "having", "doing"]),
        ("JJ", &["many", "much", "few", "several", "such", "own", "other"]),
        ("JJR", &["more", "less", "better", "worse"]),
        ("JJS", &["most", "least", "best", "worst"]),
    ];

    let mut map = HashMap::new();
    for (tag, words) in groups {
        for word in *words {
            map.insert(*word, *tag);
        }
    }
    map
});

/// Tags for contracted clitics split off by the tokenizer.
pub static CLITICS: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        // clitic -> (tag, lemma)
        [
            ("n't", ("RB", "not")),
            ("'re", ("VBP", "be")),
            ("'m", ("VBP", "be")),
            ("'ve", ("VBP", "have")),
            ("'ll", ("MD", "will")),
            ("'d", ("MD", "would")),
        ]
        .into_iter()
        .collect()
    });

/// Object and reflexive pronouns mapped to their subject form.
pub static PRONOUN_LEMMAS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("me", "i"),
        ("him", "he"),
        ("us", "we"),
        ("them", "they"),
        ("myself", "i"),
        ("himself", "he"),
        ("herself", "she"),
        ("itself", "it"),
        ("ourselves", "we"),
        ("themselves", "they"),
    ]
    .into_iter()
    .collect()
});

/// Subjects that take a plural verb form (`they sleep`, `I sleep`).
pub static PLURAL_SUBJECTS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["i", "you", "we", "they"].into_iter().collect());

/// Title abbreviations that keep their trailing period as part of the token.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "inc", "ltd", "co",
        "corp", "gen", "gov", "sen", "rep", "capt", "lt", "col", "sgt", "fig", "approx",
    ]
    .into_iter()
    .collect()
});

/// Nouns that end in `-ing` but are not gerunds.
pub static ING_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "thing", "king", "ring", "wing", "string", "spring", "nothing", "something",
        "anything", "everything", "morning", "evening", "ceiling", "sibling", "pudding",
        "wedding", "building", "meaning", "feeling",
    ]
    .into_iter()
    .collect()
});

/// Plural-looking words that lemmatize to themselves.
pub static INVARIANT_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "series", "species", "news", "means", "physics", "mathematics", "politics",
        "economics", "sheep", "deer", "fish", "aircraft", "lens", "gas",
    ]
    .into_iter()
    .collect()
});

// ============================================================================
// Open-class lexicon
// ============================================================================

/// Base forms of common verbs. Used to recognize verbs in context and to
/// pick between candidate stems while lemmatizing.
pub static KNOWN_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "accept", "add", "agree", "allow", "answer", "appear", "apply", "argue", "arrive", "ask",
        "bark", "beat", "become", "begin", "believe", "break", "bring", "build", "buy", "call",
        "carry", "catch", "cause", "change", "chase", "cheat", "choose", "close", "come",
        "consider", "contain", "continue", "cook", "cost", "create", "cry", "cut", "dance",
        "decide", "defeat", "describe", "develop", "die", "dig", "draw", "dream", "drink", "drive",
        "drop", "eat", "enjoy", "enter", "explain", "fall", "feel", "fight", "fill", "find",
        "finish", "fly", "follow", "forget", "get", "give", "go", "grow", "happen", "hate", "hear",
        "heat", "help", "hide", "hit", "hold", "hope", "hurry", "include", "jump", "keep", "kill",
        "know", "laugh", "lead", "learn", "leave", "let", "lie", "like", "listen", "live", "look",
        "lose", "love", "make", "mean", "meet", "move", "need", "offer", "open", "pay", "plan",
        "play", "prefer", "produce", "provide", "pull", "push", "put", "read", "reach", "receive",
        "remain", "remember", "repeat", "report", "require", "return", "ride", "rise", "run",
        "say", "see", "seem", "sell", "send", "serve", "set", "shine", "show", "sing", "sit",
        "sleep", "smile", "speak", "spend", "stand", "start", "stay", "stop", "study", "succeed",
        "suggest", "swim", "take", "talk", "teach", "tell", "think", "throw", "travel", "treat",
        "try", "turn", "understand", "use", "visit", "wait", "wake", "walk", "want", "watch",
        "wear", "win", "wish", "work", "worry", "write",
    ]
    .into_iter()
    .collect()
});

/// Common base adjectives, used to recognize comparatives and superlatives.
pub static KNOWN_ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "good", "new", "first", "last", "long", "great", "little", "old", "right", "big",
        "high", "different", "small", "large", "next", "early", "young", "important",
        "public", "bad", "same", "able", "lazy", "quick", "brown", "red", "blue", "green",
        "happy", "sad", "fast", "slow", "easy", "hard", "hot", "cold", "warm", "cool", "nice",
        "late", "strong", "weak", "rich", "poor", "tall", "short", "wide", "deep", "dark",
        "bright", "clean", "clear", "close", "simple", "safe", "busy", "funny", "pretty",
        "heavy", "light", "fine", "free", "full", "true", "wise", "brave", "calm",
    ]
    .into_iter()
    .collect()
});

/// Irregular verb forms: form -> (lemma, tag).
pub static IRREGULAR_VERBS: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        [
            ("is", ("be", "VBZ")),
            ("are", ("be", "VBP")),
            ("am", ("be", "VBP")),
            ("was", ("be", "VBD")),
            ("were", ("be", "VBD")),
            ("been", ("be", "VBN")),
            ("being", ("be", "VBG")),
            ("has", ("have", "VBZ")),
            ("had", ("have", "VBD")),
            ("having", ("have", "VBG")),
            ("does", ("do", "VBZ")),
            ("did", ("do", "VBD")),
            ("done", ("do", "VBN")),
            ("goes", ("go", "VBZ")),
            ("went", ("go", "VBD")),
            ("gone", ("go", "VBN")),
            ("ate", ("eat", "VBD")),
            ("eaten", ("eat", "VBN")),
            ("began", ("begin", "VBD")),
            ("begun", ("begin", "VBN")),
            ("became", ("become", "VBD")),
            ("broke", ("break", "VBD")),
            ("broken", ("break", "VBN")),
            ("brought", ("bring", "VBD")),
            ("built", ("build", "VBD")),
            ("bought", ("buy", "VBD")),
            ("caught", ("catch", "VBD")),
            ("chose", ("choose", "VBD")),
            ("chosen", ("choose", "VBN")),
            ("came", ("come", "VBD")),
            ("dug", ("dig", "VBD")),
            ("drew", ("draw", "VBD")),
            ("drawn", ("draw", "VBN")),
            ("drank", ("drink", "VBD")),
            ("drunk", ("drink", "VBN")),
            ("drove", ("drive", "VBD")),
            ("driven", ("drive", "VBN")),
            ("fell", ("fall", "VBD")),
            ("fallen", ("fall", "VBN")),
            ("felt", ("feel", "VBD")),
            ("fought", ("fight", "VBD")),
            ("found", ("find", "VBD")),
            ("flew", ("fly", "VBD")),
            ("flown", ("fly", "VBN")),
            ("forgot", ("forget", "VBD")),
            ("forgotten", ("forget", "VBN")),
            ("got", ("get", "VBD")),
            ("gotten", ("get", "VBN")),
            ("gave", ("give", "VBD")),
            ("given", ("give", "VBN")),
            ("grew", ("grow", "VBD")),
            ("grown", ("grow", "VBN")),
            ("heard", ("hear", "VBD")),
            ("hid", ("hide", "VBD")),
            ("hidden", ("hide", "VBN")),
            ("held", ("hold", "VBD")),
            ("kept", ("keep", "VBD")),
            ("knew", ("know", "VBD")),
            ("known", ("know", "VBN")),
            ("led", ("lead", "VBD")),
            ("left", ("leave", "VBD")),
            ("lay", ("lie", "VBD")),
            ("lost", ("lose", "VBD")),
            ("made", ("make", "VBD")),
            ("meant", ("mean", "VBD")),
            ("met", ("meet", "VBD")),
            ("paid", ("pay", "VBD")),
            ("rode", ("ride", "VBD")),
            ("ridden", ("ride", "VBN")),
            ("rose", ("rise", "VBD")),
            ("risen", ("rise", "VBN")),
            ("ran", ("run", "VBD")),
            ("said", ("say", "VBD")),
            ("saw", ("see", "VBD")),
            ("seen", ("see", "VBN")),
            ("sold", ("sell", "VBD")),
            ("sent", ("send", "VBD")),
            ("shone", ("shine", "VBD")),
            ("sang", ("sing", "VBD")),
            ("sung", ("sing", "VBN")),
            ("sat", ("sit", "VBD")),
            ("slept", ("sleep", "VBD")),
            ("spoke", ("speak", "VBD")),
            ("spoken", ("speak", "VBN")),
            ("spent", ("spend", "VBD")),
            ("stood", ("stand", "VBD")),
            ("swam", ("swim", "VBD")),
            ("swum", ("swim", "VBN")),
            ("took", ("take", "VBD")),
            ("taken", ("take", "VBN")),
            ("taught", ("teach", "VBD")),
            ("told", ("tell", "VBD")),
            ("thought", ("think", "VBD")),
            ("threw", ("throw", "VBD")),
            ("thrown", ("throw", "VBN")),
            ("understood", ("understand", "VBD")),
            ("woke", ("wake", "VBD")),
            ("woken", ("wake", "VBN")),
            ("wore", ("wear", "VBD")),
            ("worn", ("wear", "VBN")),
            ("won", ("win", "VBD")),
            ("wrote", ("write", "VBD")),
            ("written", ("write", "VBN")),
        ]
        .into_iter()
        .collect()
    });

/// Irregular plural nouns: plural -> singular.
pub static IRREGULAR_NOUNS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("people", "person"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("oxen", "ox"),
        ("wolves", "wolf"),
        ("knives", "knife"),
        ("leaves", "leaf"),
        ("lives", "life"),
        ("wives", "wife"),
        ("halves", "half"),
        ("shelves", "shelf"),
        ("thieves", "thief"),
        ("loaves", "loaf"),
        ("shoes", "shoe"),
        ("buses", "bus"),
        ("data", "datum"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("analyses", "analysis"),
        ("crises", "crisis"),
    ]
    .into_iter()
    .collect()
});

/// Irregular comparatives and superlatives: form -> base.
pub static IRREGULAR_ADJECTIVES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        [
            ("better", "good"),
            ("best", "good"),
            ("worse", "bad"),
            ("worst", "bad"),
            ("more", "more"),
            ("most", "most"),
            ("less", "less"),
            ("least", "least"),
        ]
        .into_iter()
        .collect()
    });

/// Word endings whose stems are normally spelled with a trailing `e`
/// (`creat-ed` -> `create`).
pub const SILENT_E_ENDINGS: &[&str] = &[
    "at", "iz", "is", "iv", "ur", "ud", "ov", "uc", "ac", "ak", "av", "id", "ir", "or", "ot",
    "um", "ag", "ang", "abl", "ibl",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_lowercase() {
        let all_keys = CLOSED_CLASS
            .keys()
            .chain(KNOWN_VERBS.iter())
            .chain(KNOWN_ADJECTIVES.iter())
            .chain(IRREGULAR_VERBS.keys())
            .chain(IRREGULAR_NOUNS.keys())
            .chain(ABBREVIATIONS.iter());
        for key in all_keys {
            assert_eq!(*key, key.to_lowercase(), "table key '{}' is not lowercase", key);
        }
    }

    #[test]
    fn test_irregular_verb_lemmas_are_known_verbs() {
        for (form, (lemma, _)) in IRREGULAR_VERBS.iter() {
            assert!(
                *lemma == "be" || *lemma == "have" || *lemma == "do" || KNOWN_VERBS.contains(lemma),
                "lemma '{}' of '{}' missing from KNOWN_VERBS",
                lemma,
                form
            );
        }
    }

    #[test]
    fn test_closed_class_lookup() {
        assert_eq!(CLOSED_CLASS.get("the"), Some(&"DT"));
        assert_eq!(CLOSED_CLASS.get("to"), Some(&"TO"));
        assert_eq!(CLOSED_CLASS.get("cat"), None);
    }
}
