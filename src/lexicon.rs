//! # Lexicon
//!
//! Rule table and marker lexicons used by segmentation and analysis.
//!
//! - `WordRuleTable`: prefix/suffix/conjunction word lists used as a flat
//!   union for exact-match segmentation.
//! - `WordPatterns`: question/positive/negative/polite marker lists used for
//!   substring-containment scoring.
//! - A built-in seed is embedded from `thai_lexicon.json`; callers may also
//!   load their own tables from a JSON file (fail-soft to the seed).
//!
//! Tables are plain immutable values passed into the analyzer; the `Lazy`
//! static is only the default seed.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::warn;

static SEED: Lazy<LexiconConfig> = Lazy::new(|| {
    let raw = include_str!("../thai_lexicon.json");
    serde_json::from_str::<LexiconConfig>(raw).expect("valid built-in lexicon")
});

/// Full lexicon configuration: segmentation rules + marker patterns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LexiconConfig {
    pub rules: WordRuleTable,
    pub patterns: WordPatterns,
}

/// Known word strings for segmentation, in three named categories.
///
/// The categories are functionally a single flat set: lookup scans
/// prefixes → suffixes → conjunctions and the first exact match wins.
/// The seed data never lists the same string in two categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WordRuleTable {
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
    #[serde(default)]
    pub conjunctions: Vec<String>,
}

impl WordRuleTable {
    /// Exact-match lookup against the flat union of all three categories.
    pub fn is_rule_word(&self, candidate: &str) -> bool {
        self.prefixes
            .iter()
            .chain(self.suffixes.iter())
            .chain(self.conjunctions.iter())
            .any(|w| w == candidate)
    }
}

/// Marker lexicons for sentiment, politeness, and question detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WordPatterns {
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
    #[serde(default)]
    pub polite: Vec<String>,
}

impl LexiconConfig {
    /// Built-in Thai seed tables.
    pub fn seed() -> &'static LexiconConfig {
        &SEED
    }

    /// Parse a lexicon from a JSON string.
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load a lexicon from a JSON file.
    /// Falls back to the built-in seed on a missing or malformed file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(raw) => match Self::from_json_str(&raw) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!(%err, "malformed lexicon file; using built-in seed");
                    Self::seed().clone()
                }
            },
            Err(err) => {
                warn!(%err, "unreadable lexicon file; using built-in seed");
                Self::seed().clone()
            }
        }
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self::seed().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses_and_is_populated() {
        let seed = LexiconConfig::seed();
        assert!(!seed.rules.prefixes.is_empty());
        assert!(!seed.rules.suffixes.is_empty());
        assert!(!seed.rules.conjunctions.is_empty());
        assert!(!seed.patterns.questions.is_empty());
        assert!(!seed.patterns.positive.is_empty());
        assert!(!seed.patterns.negative.is_empty());
        assert!(!seed.patterns.polite.is_empty());
    }

    #[test]
    fn seed_categories_never_share_a_string() {
        let r = &LexiconConfig::seed().rules;
        for p in &r.prefixes {
            assert!(!r.suffixes.contains(p), "{p} in prefixes and suffixes");
            assert!(!r.conjunctions.contains(p), "{p} in prefixes and conjunctions");
        }
        for s in &r.suffixes {
            assert!(!r.conjunctions.contains(s), "{s} in suffixes and conjunctions");
        }
    }

    #[test]
    fn flat_lookup_spans_all_categories() {
        let rules = &LexiconConfig::seed().rules;
        assert!(rules.is_rule_word("การ")); // prefix
        assert!(rules.is_rule_word("ครับ")); // suffix
        assert!(rules.is_rule_word("และ")); // conjunction
        assert!(!rules.is_rule_word("สวัสดี"));
        assert!(!rules.is_rule_word(""));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let cfg = LexiconConfig::from_json_str(r#"{"rules": {}, "patterns": {}}"#).unwrap();
        assert!(cfg.rules.prefixes.is_empty());
        assert!(cfg.patterns.polite.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(LexiconConfig::from_json_str("{not json").is_err());
    }

    #[test]
    fn missing_or_broken_file_falls_back_to_seed() {
        let cfg = LexiconConfig::load_from_file("definitely/not/here.json");
        assert_eq!(&cfg, LexiconConfig::seed());

        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"[1, 2, 3]").expect("write");
        let cfg = LexiconConfig::load_from_file(file.path());
        assert_eq!(&cfg, LexiconConfig::seed());
    }
}
