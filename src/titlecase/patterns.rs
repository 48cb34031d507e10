//! Pattern table, compiled once on first use and shared read-only across threads

use lazy_static::lazy_static;
use regex::Regex;

/// Small words, kept lowercase except at phrase boundaries
pub const SMALL: &str = r"a|an|and|as|at|but|by|en|for|if|in|of|on|or|the|to|v\.?|via|vs\.?";

/// Punctuation set, written as the inside of a character class
pub const PUNCT: &str = r##"!"#$%&'‘()*+,\-./:;?@\[\]_`{|}~"##;

lazy_static! {
    /// Whole token is a small word
    pub static ref SMALL_WORDS: Regex = Regex::new(&format!(r"(?i)^(?:{SMALL})$")).unwrap();

    /// Lowercase letter, period, lowercase letter (example.com, del.icio.us)
    pub static ref INLINE_PERIOD: Regex = Regex::new(r"(?i)[a-z][.][a-z]").unwrap();

    /// Uppercase letter somewhere after the first letter (iTunes, AT&T)
    pub static ref UC_ELSEWHERE: Regex =
        Regex::new(&format!(r"[{PUNCT}]*?[a-zA-Z]+[A-Z]+?")).unwrap();

    /// First letter after an optional run of leading punctuation
    pub static ref CAP_FIRST: Regex = Regex::new(&format!(r"^[{PUNCT}]*?(\p{{L}})")).unwrap();

    /// Small word opening a line, optionally behind punctuation
    pub static ref SMALL_FIRST: Regex =
        Regex::new(&format!(r"(?i)^([{PUNCT}]*)({SMALL})\b")).unwrap();

    /// Small word closing a line, optionally followed by one punctuation mark
    pub static ref SMALL_LAST: Regex =
        Regex::new(&format!(r"(?i)\b({SMALL})[{PUNCT}]?$")).unwrap();

    /// Small word opening a sub-phrase. Case-sensitive: only words the token
    /// pass left lowercase are targeted.
    pub static ref SUBPHRASE: Regex = Regex::new(&format!(r"([:.;?!][ ])({SMALL})")).unwrap();

    /// d'artagnan, o'reilly, l'amour
    pub static ref APOS_SECOND: Regex = Regex::new(r"(?i)^[dol]['‘][a-z]+$").unwrap();

    /// Line made only of uppercase letters, digits, whitespace and punctuation
    pub static ref ALL_CAPS: Regex = Regex::new(&format!(r"^[A-Z\s0-9{PUNCT}]+$")).unwrap();

    /// U.S., D.C., U.S.A.
    pub static ref UC_INITIALS: Regex = Regex::new(r"^(?:[A-Z]\.|[A-Z]\.[A-Z])+$").unwrap();

    /// Mc surname prefix and the word characters after it
    pub static ref MAC_MC: Regex = Regex::new(r"^([Mm]c)(\w+)").unwrap();

    /// Line separator: any run of CR/LF
    pub static ref LINES: Regex = Regex::new(r"[\r\n]+").unwrap();

    /// Token separator: any run of spaces and tabs
    pub static ref WORDS: Regex = Regex::new(r"[\t ]+").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_words() {
        for word in ["a", "An", "AND", "v", "v.", "vs", "vs.", "via", "the"] {
            assert!(SMALL_WORDS.is_match(word), "{word}");
        }
        for word in ["about", "v..", "", "'a", "thee"] {
            assert!(!SMALL_WORDS.is_match(word), "{word}");
        }
    }

    #[test]
    fn test_uc_elsewhere() {
        assert!(UC_ELSEWHERE.is_match("iTunes"));
        assert!(UC_ELSEWHERE.is_match("AT&T's"));
        assert!(UC_ELSEWHERE.is_match("McTavish"));
        assert!(UC_ELSEWHERE.is_match("OmniFocus"));
        assert!(!UC_ELSEWHERE.is_match("Q&A"));
        assert!(!UC_ELSEWHERE.is_match("Sub-Phrase"));
        assert!(!UC_ELSEWHERE.is_match("word"));
    }

    #[test]
    fn test_inline_period() {
        assert!(INLINE_PERIOD.is_match("example.com"));
        assert!(INLINE_PERIOD.is_match("del.icio.us"));
        assert!(!INLINE_PERIOD.is_match("quotes.'"));
        assert!(!INLINE_PERIOD.is_match("v."));
    }

    #[test]
    fn test_all_caps() {
        assert!(ALL_CAPS.is_match("WASHINGTON, D.C. SHOULD BE FIXED"));
        assert!(ALL_CAPS.is_match("FOO BAR 5TH ST"));
        assert!(!ALL_CAPS.is_match("FOO bAR"));
        assert!(!ALL_CAPS.is_match(""));
    }

    #[test]
    fn test_uc_initials() {
        assert!(UC_INITIALS.is_match("D.C."));
        assert!(UC_INITIALS.is_match("U.S.A."));
        assert!(UC_INITIALS.is_match("U.S"));
        assert!(!UC_INITIALS.is_match("USA"));
        assert!(!UC_INITIALS.is_match("D.C.,"));
    }

    #[test]
    fn test_punct_class_is_literal() {
        let class = Regex::new(&format!("^[{PUNCT}]+$")).unwrap();
        assert!(class.is_match("[]'‘\"-_~"));
        assert!(!class.is_match("\\"));
        assert!(!class.is_match("<=>"));
    }
}
