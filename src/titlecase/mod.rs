//! Title-case engine
//!
//! Capitalizes free text (song, album and artist names) the way the major
//! style guides do: small words stay lowercase except at phrase boundaries,
//! acronyms and inner capitals are kept, Mc surnames and apostrophe prefixes
//! are capitalized per segment.
//!
//! ## Pipeline
//! 1. Split into lines (CR/LF runs), then tokens (space/tab runs)
//! 2. Detect all-caps lines, fold their tokens to lowercase (initials excepted)
//! 3. Pre-hook, rule chain (first match wins), post-hook per token
//! 4. Line touch-up: small word at line start, line end, after `: . ; ? !`

mod casing;
mod engine;
mod hooks;
mod patterns;
mod rules;
mod types;

pub use engine::{convert, titlecase, TitleCaseEngine};
pub use hooks::{NoHook, PostHook, PreHook};
pub use rules::{classify, Rule, RULE_CHAIN};
pub use types::{ConversionResult, LineReport, TokenRule};
