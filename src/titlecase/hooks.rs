//! Caller-supplied extension points around the token rule chain
//!
//! Both hooks receive the token and the line's all-caps flag. Closures with
//! the matching signature implement the traits directly; [`NoHook`] is the
//! do-nothing default.

/// Runs before the standard rules.
///
/// Returns the replacement token and whether it is final. A final replacement
/// skips every standard rule and goes straight to the post-hook.
pub trait PreHook: Send + Sync {
    fn before(&self, word: &str, all_caps: bool) -> (String, bool);
}

/// Runs after the standard rules; its return value is the token's output
pub trait PostHook: Send + Sync {
    fn after(&self, word: &str, all_caps: bool) -> String;
}

impl<F> PreHook for F
where
    F: Fn(&str, bool) -> (String, bool) + Send + Sync,
{
    fn before(&self, word: &str, all_caps: bool) -> (String, bool) {
        self(word, all_caps)
    }
}

impl<F> PostHook for F
where
    F: Fn(&str, bool) -> String + Send + Sync,
{
    fn after(&self, word: &str, all_caps: bool) -> String {
        self(word, all_caps)
    }
}

/// Hook that leaves every token untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHook;

impl PreHook for NoHook {
    fn before(&self, word: &str, _all_caps: bool) -> (String, bool) {
        (word.to_string(), false)
    }
}

impl PostHook for NoHook {
    fn after(&self, word: &str, _all_caps: bool) -> String {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hook_passes_through() {
        assert_eq!(NoHook.before("Word", true), ("Word".to_string(), false));
        assert_eq!(NoHook.after("Word", false), "Word");
    }

    #[test]
    fn test_closures_are_hooks() {
        let pre = |word: &str, all_caps: bool| (word.to_uppercase(), all_caps);
        let post = |word: &str, _all_caps: bool| format!("<{word}>");

        assert_eq!(pre.before("ab", true), ("AB".to_string(), true));
        assert_eq!(post.after("ab", false), "<ab>");
    }
}
