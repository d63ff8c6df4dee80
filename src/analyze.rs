//! # Text Analyzer
//!
//! Combines segmentation, character classification, and marker-lexicon
//! scoring into one immutable [`AnalysisResult`] per input text.
//!
//! Scoring is deliberately coupled to segmentation quality: sentiment and
//! politeness markers are looked for *inside segmented words* (substring
//! containment), while question markers are looked for in the raw text.
//! A marker split across a segmentation boundary is not detected.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::chars::{classify, CharClass};
use crate::lexicon::{LexiconConfig, WordPatterns};
use crate::segment::WordSegmenter;

/// Sentiment label; sign-matches the integer score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn from_score(score: i32) -> Self {
        if score > 0 {
            Sentiment::Positive
        } else if score < 0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Politeness level; a deterministic function of the integer score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    #[serde(rename = "very polite")]
    VeryPolite,
    Polite,
    Casual,
}

impl Politeness {
    /// `>2` → very polite, `(0,2]` → polite, `<=0` → casual.
    pub fn from_score(score: i32) -> Self {
        if score > 2 {
            Politeness::VeryPolite
        } else if score > 0 {
            Politeness::Polite
        } else {
            Politeness::Casual
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentScore {
    pub score: i32,
    pub label: Sentiment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolitenessScore {
    pub score: i32,
    pub level: Politeness,
}

/// Question-marker detection over the raw, unsegmented text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestionAnalysis {
    pub is_question: bool,
    /// Markers found, unique, in lexicon order.
    pub markers: Vec<String>,
}

/// Per-class character counts over the raw text, plus the scalar total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CharDistribution {
    pub consonants: usize,
    pub vowels: usize,
    pub tones: usize,
    pub special: usize,
    pub other: usize,
    pub total: usize,
}

impl CharDistribution {
    fn bump(&mut self, class: CharClass) {
        match class {
            CharClass::Consonant => self.consonants += 1,
            CharClass::Vowel => self.vowels += 1,
            CharClass::Tone => self.tones += 1,
            CharClass::Special => self.special += 1,
            CharClass::Other => self.other += 1,
        }
        self.total += 1;
    }

    pub fn count(&self, class: CharClass) -> usize {
        match class {
            CharClass::Consonant => self.consonants,
            CharClass::Vowel => self.vowels,
            CharClass::Tone => self.tones,
            CharClass::Special => self.special,
            CharClass::Other => self.other,
        }
    }
}

/// Immutable analysis record for one input text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub text: String,
    /// Length in Unicode scalars (equals `characters.total`).
    pub length: usize,
    pub words: Vec<String>,
    pub word_count: usize,
    pub unique_words: usize,
    pub word_frequency: HashMap<String, usize>,
    pub characters: CharDistribution,
    pub sentiment: SentimentScore,
    pub politeness: PolitenessScore,
    pub question: QuestionAnalysis,
}

/// Stateless analyzer over immutable rule and marker tables.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    segmenter: WordSegmenter,
    patterns: WordPatterns,
}

impl TextAnalyzer {
    pub fn new(lexicon: LexiconConfig) -> Self {
        Self {
            segmenter: WordSegmenter::new(lexicon.rules),
            patterns: lexicon.patterns,
        }
    }

    /// Analyze one text. Total over any Unicode string; an empty input
    /// yields zero counts, neutral, casual, non-question.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let words = self.segmenter.segment(text);

        let mut characters = CharDistribution::default();
        for ch in text.chars() {
            characters.bump(classify(ch));
        }

        // One increment per word and check, regardless of how many markers
        // that word contains. A word may trigger positive and negative both.
        let mut sentiment_score = 0;
        let mut politeness_score = 0;
        for word in &words {
            if self.patterns.positive.iter().any(|m| word.contains(m.as_str())) {
                sentiment_score += 1;
            }
            if self.patterns.negative.iter().any(|m| word.contains(m.as_str())) {
                sentiment_score -= 1;
            }
            if self.patterns.polite.iter().any(|m| word.contains(m.as_str())) {
                politeness_score += 1;
            }
        }

        let mut markers = Vec::new();
        for marker in &self.patterns.questions {
            if text.contains(marker.as_str()) && !markers.contains(marker) {
                markers.push(marker.clone());
            }
        }

        let mut word_frequency: HashMap<String, usize> = HashMap::new();
        for word in &words {
            *word_frequency.entry(word.clone()).or_insert(0) += 1;
        }

        AnalysisResult {
            text: text.to_string(),
            length: characters.total,
            word_count: words.len(),
            unique_words: word_frequency.len(),
            words,
            word_frequency,
            characters,
            sentiment: SentimentScore {
                score: sentiment_score,
                label: Sentiment::from_score(sentiment_score),
            },
            politeness: PolitenessScore {
                score: politeness_score,
                level: Politeness::from_score(politeness_score),
            },
            question: QuestionAnalysis {
                is_question: !markers.is_empty(),
                markers,
            },
        }
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(LexiconConfig::seed().clone())
    }
}
