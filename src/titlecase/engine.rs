//! Title-case engine
//!
//! Splits text into lines and lines into tokens, runs every token through
//! the hooks and the rule chain, then fixes up small words that sit at a
//! line or sub-phrase boundary.

use std::borrow::Cow;
use std::time::Instant;

use regex::Captures;

use crate::titlecase::casing::title_words;
use crate::titlecase::hooks::{NoHook, PostHook, PreHook};
use crate::titlecase::patterns::{
    ALL_CAPS, LINES, SMALL_FIRST, SMALL_LAST, SUBPHRASE, UC_INITIALS, WORDS,
};
use crate::titlecase::rules;
use crate::titlecase::types::{ConversionResult, LineReport, TokenRule};

/// Title-case engine (stateless apart from its hooks, safe to share across threads)
pub struct TitleCaseEngine {
    pre_hook: Box<dyn PreHook>,
    post_hook: Box<dyn PostHook>,
}

impl TitleCaseEngine {
    /// Creates an engine without hooks
    pub fn new() -> Self {
        Self {
            pre_hook: Box::new(NoHook),
            post_hook: Box::new(NoHook),
        }
    }

    /// Sets the hook that runs before the standard rules
    pub fn with_pre_hook(mut self, hook: impl PreHook + 'static) -> Self {
        self.pre_hook = Box::new(hook);
        self
    }

    /// Sets the hook that runs after the standard rules
    pub fn with_post_hook(mut self, hook: impl PostHook + 'static) -> Self {
        self.post_hook = Box::new(hook);
        self
    }

    /// Title-cases `text`
    pub fn convert(&self, text: &str) -> String {
        self.caser().convert(text)
    }

    /// Title-cases `text` and reports which rule decided each token
    pub fn convert_detailed(&self, text: &str) -> ConversionResult {
        let start = Instant::now();

        let lines: Vec<LineReport> = LINES
            .split(text)
            .map(|line| self.caser().convert_line(line))
            .collect();
        let converted = lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let elapsed_us = start.elapsed().as_micros() as u64;
        let changed = converted != text;
        tracing::debug!(
            "Title-cased {} lines in {}us (changed: {})",
            lines.len(),
            elapsed_us,
            changed
        );

        ConversionResult {
            text: converted,
            changed,
            lines,
            elapsed_us,
        }
    }

    fn caser(&self) -> LineCaser<'_> {
        LineCaser {
            pre_hook: &*self.pre_hook,
            post_hook: &*self.post_hook,
        }
    }
}

impl Default for TitleCaseEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Title-cases `text`, running the optional hooks around the standard rules
pub fn convert(
    text: &str,
    pre_hook: Option<&dyn PreHook>,
    post_hook: Option<&dyn PostHook>,
) -> String {
    LineCaser {
        pre_hook: pre_hook.unwrap_or(&NoHook),
        post_hook: post_hook.unwrap_or(&NoHook),
    }
    .convert(text)
}

/// Title-cases `text` with the standard rules only
pub fn titlecase(text: &str) -> String {
    convert(text, None, None)
}

/// Borrowed view of the hooks for one call
struct LineCaser<'a> {
    pre_hook: &'a dyn PreHook,
    post_hook: &'a dyn PostHook,
}

impl LineCaser<'_> {
    fn convert(&self, text: &str) -> String {
        LINES
            .split(text)
            .map(|line| self.convert_line(line).text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn convert_line(&self, line: &str) -> LineReport {
        let all_caps = ALL_CAPS.is_match(line);

        let (words, rules): (Vec<String>, Vec<TokenRule>) = WORDS
            .split(line)
            .filter(|word| !word.is_empty())
            .map(|word| self.convert_word(word, all_caps))
            .unzip();

        LineReport {
            text: touch_up(&words.join(" ")),
            all_caps,
            rules,
        }
    }

    fn convert_word(&self, word: &str, all_caps: bool) -> (String, TokenRule) {
        let (replacement, is_final) = self.pre_hook.before(word, all_caps);
        let (converted, rule) = if is_final {
            (replacement, TokenRule::PreHookFinal)
        } else {
            apply_rules(&replacement, all_caps)
        };
        tracing::trace!("{:?} -> {:?} ({:?})", word, converted, rule);

        (self.post_hook.after(&converted, all_caps), rule)
    }
}

/// All-caps folding followed by the rule chain
fn apply_rules(word: &str, all_caps: bool) -> (String, TokenRule) {
    let word: Cow<'_, str> = if all_caps {
        if UC_INITIALS.is_match(word) {
            return (word.to_string(), TokenRule::Initials);
        }
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    };

    let rule = rules::classify(&word);
    (rule.apply(&word), rule.kind)
}

/// Capitalizes small words left lowercase at the start of the line, at its
/// end, and right after a sub-phrase delimiter.
///
/// The sub-phrase pass only sees a small word directly after "<delimiter> ";
/// a quote-wrapped small word is capitalized by the token rules instead.
fn touch_up(line: &str) -> String {
    let title = |caps: &Captures<'_>| title_words(&caps[0]);

    let first = SMALL_FIRST.replace(line, title);
    let last = SMALL_LAST.replace(&first, title);
    SUBPHRASE.replace_all(&last, title).into_owned()
}
