//! Text normalization into index terms

use regex::Regex;

/// Splits text into lower-case `[a-z0-9]` terms of two or more characters.
pub struct Tokenizer {
    separator_regex: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        let separator_regex = Regex::new(r"[^a-z0-9]+").expect("Invalid separator regex");

        Self { separator_regex }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        self.separator_regex
            .split(&lowered)
            .filter(|term| term.len() > 1)
            .map(str::to_string)
            .collect()
    }
}
