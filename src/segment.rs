//! # Word Segmentation
//!
//! Greedy single-pass segmentation of Thai text into word tokens.
//!
//! The scanner grows a buffer one scalar at a time and, after each append,
//! tests the *entire* buffer for exact equality against the rule table. A
//! rule word is therefore only recognized when it forms the current segment
//! from its start; there is no substring search, no backtracking, and no
//! longest-prefix resolution. Whitespace is appended like any other character
//! and then acts as a delimiter for the trimmed buffer.

use crate::lexicon::WordRuleTable;

/// Stateless segmenter over an immutable rule table.
#[derive(Debug, Clone, Default)]
pub struct WordSegmenter {
    rules: WordRuleTable,
}

impl WordSegmenter {
    pub fn new(rules: WordRuleTable) -> Self {
        Self { rules }
    }

    /// Segment `text` into an ordered list of non-empty word tokens.
    ///
    /// Per scalar:
    /// 1. Append it to the buffer.
    /// 2. If the buffer now equals a rule word, emit it and reset.
    /// 3. Otherwise, on whitespace, emit the trimmed buffer if non-empty.
    ///
    /// The trimmed residual is emitted after the loop; purely-whitespace
    /// tokens are filtered out.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut words = Vec::new();
        let mut current = String::new();

        for ch in text.chars() {
            current.push(ch);

            let mut emitted = false;
            if self.rules.is_rule_word(&current) {
                words.push(std::mem::take(&mut current));
                emitted = true;
            }

            if !emitted && ch.is_whitespace() && !current.trim().is_empty() {
                words.push(current.trim().to_string());
                current.clear();
            }
        }

        if !current.trim().is_empty() {
            words.push(current.trim().to_string());
        }

        words.retain(|w| !w.trim().is_empty());
        words
    }
}
