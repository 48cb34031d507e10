//! Title-case reporting types

use serde::{Deserialize, Serialize};

/// Rule that decided a token's output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenRule {
    /// Pre-hook returned a final replacement
    PreHookFinal,
    /// Uppercase initials kept inside an all-caps line (D.C.)
    Initials,
    /// Leading single-letter apostrophe prefix (o'reilly)
    Apostrophe,
    /// Inline period or inner capital, passed through (example.com, iTunes)
    Preserve,
    /// Small word, lowercased
    SmallWord,
    /// Mc surname prefix (mctavish)
    McPrefix,
    /// First letter of each separator-delimited piece capitalized
    Capitalize,
}

/// Per-line conversion report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineReport {
    /// Converted line
    pub text: String,
    /// Whether the input line was treated as all-caps
    pub all_caps: bool,
    /// Deciding rule of each token, in token order
    pub rules: Vec<TokenRule>,
}

/// Conversion result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Converted text
    pub text: String,
    /// Whether anything changed
    pub changed: bool,
    /// One entry per line of the output
    pub lines: Vec<LineReport>,
    /// Processing time in microseconds
    pub elapsed_us: u64,
}

impl ConversionResult {
    /// Total number of tokens across all lines
    pub fn token_count(&self) -> usize {
        self.lines.iter().map(|line| line.rules.len()).sum()
    }
}
