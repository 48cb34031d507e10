// Preserved spellings
//
// Words the caller wants written exactly one way ("AC/DC", "feat."), applied
// as a pre-hook so they bypass the standard rules.

use std::collections::HashMap;

use crate::titlecase::PreHook;

/// Normalizes an entry (trims surrounding whitespace)
pub fn normalize_word(word: &str) -> String {
    word.trim().to_string()
}

/// Case-insensitive lookup of canonical spellings
#[derive(Debug, Clone, Default)]
pub struct PreserveDictionary {
    words: HashMap<String, String>,
}

impl PreserveDictionary {
    /// Builds the dictionary; empty entries are dropped and a later entry
    /// replaces an earlier one that differs only in case.
    ///
    /// Entries with inner whitespace are dropped too: tokens never contain
    /// blanks, so such an entry could never match.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = HashMap::new();
        for entry in entries {
            let normalized = normalize_word(entry.as_ref());
            if normalized.is_empty() {
                continue;
            }
            if normalized.contains(char::is_whitespace) {
                tracing::warn!(
                    "Ignoring preserved spelling {:?}: only single words can match",
                    normalized
                );
                continue;
            }
            words.insert(normalized.to_lowercase(), normalized);
        }
        Self { words }
    }

    /// Canonical spelling of `word`, if it is in the dictionary
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.words.get(&word.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl PreHook for PreserveDictionary {
    fn before(&self, word: &str, _all_caps: bool) -> (String, bool) {
        match self.lookup(word) {
            Some(canonical) => (canonical.to_string(), true),
            None => (word.to_string(), false),
        }
    }
}
