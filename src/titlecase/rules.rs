//! Per-token rule chain
//!
//! Rules are evaluated in table order and the first one whose predicate
//! accepts the token decides its output. The all-caps folding and the hooks
//! wrap this chain in the engine.

use crate::titlecase::casing::{title_apostrophe_segments, title_words, upper_first};
use crate::titlecase::patterns::{
    APOS_SECOND, CAP_FIRST, INLINE_PERIOD, MAC_MC, SMALL_WORDS, UC_ELSEWHERE,
};
use crate::titlecase::types::TokenRule;

/// One entry of the rule chain
pub struct Rule {
    pub kind: TokenRule,
    matches: fn(&str) -> bool,
    transform: fn(&str) -> String,
}

impl Rule {
    /// Whether this rule accepts `word`
    pub fn matches(&self, word: &str) -> bool {
        (self.matches)(word)
    }

    /// Rewrites `word` according to this rule
    pub fn apply(&self, word: &str) -> String {
        (self.transform)(word)
    }
}

/// The rule chain in priority order. The last entry accepts every token.
pub static RULE_CHAIN: [Rule; 5] = [
    Rule {
        kind: TokenRule::Apostrophe,
        matches: is_apostrophe_prefixed,
        transform: title_apostrophe_segments,
    },
    Rule {
        kind: TokenRule::Preserve,
        matches: is_preserved,
        transform: str::to_string,
    },
    Rule {
        kind: TokenRule::SmallWord,
        matches: is_small_word,
        transform: str::to_lowercase,
    },
    Rule {
        kind: TokenRule::McPrefix,
        matches: has_mc_prefix,
        transform: capitalize_mc,
    },
    Rule {
        kind: TokenRule::Capitalize,
        matches: always,
        transform: capitalize,
    },
];

/// First rule in the chain that accepts `word`
pub fn classify(word: &str) -> &'static Rule {
    RULE_CHAIN
        .iter()
        .find(|rule| rule.matches(word))
        .unwrap_or(&RULE_CHAIN[RULE_CHAIN.len() - 1])
}

fn is_apostrophe_prefixed(word: &str) -> bool {
    APOS_SECOND.is_match(word)
}

fn is_preserved(word: &str) -> bool {
    INLINE_PERIOD.is_match(word) || UC_ELSEWHERE.is_match(word)
}

fn is_small_word(word: &str) -> bool {
    SMALL_WORDS.is_match(word)
}

fn has_mc_prefix(word: &str) -> bool {
    MAC_MC.is_match(word)
}

fn always(_word: &str) -> bool {
    true
}

/// "mctavish" → "McTavish"; anything after the word characters is kept as-is
fn capitalize_mc(word: &str) -> String {
    let Some(caps) = MAC_MC.captures(word) else {
        return word.to_string();
    };
    let (Some(prefix), Some(rest)) = (caps.get(1), caps.get(2)) else {
        return word.to_string();
    };

    format!(
        "{}{}{}",
        title_words(prefix.as_str()),
        title_words(rest.as_str()),
        &word[rest.end()..]
    )
}

/// Capitalizes every `/`- or `-`-delimited piece.
///
/// `/` is the separator only when the token has no `//`, so URLs survive.
fn capitalize(word: &str) -> String {
    let separator = if word.contains('/') && !word.contains("//") {
        "/"
    } else {
        "-"
    };

    word.split(separator)
        .map(capitalize_piece)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Uppercases the first letter after any leading punctuation
fn capitalize_piece(piece: &str) -> String {
    let Some(letter) = CAP_FIRST.captures(piece).and_then(|caps| caps.get(1)) else {
        return piece.to_string();
    };

    let mut result = String::with_capacity(piece.len());
    result.push_str(&piece[..letter.start()]);
    result.push_str(&upper_first(letter.as_str()));
    result.push_str(&piece[letter.end()..]);
    result
}
