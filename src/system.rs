//! # Response System
//!
//! Wires the analyzer and the mapping table: analyze → derive context →
//! select response. Pure and synchronous; safe to call from multiple
//! threads as long as the shared tables are not swapped mid-call (the
//! [`MappingHandle`](crate::respond::MappingHandle) covers that case).

use serde::Serialize;

use crate::analyze::{AnalysisResult, TextAnalyzer};
use crate::lexicon::LexiconConfig;
use crate::respond::{self, MappingTable, ResponseContext};

/// Outcome of processing one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub response: String,
}

/// Analyzer + mapping table, both established once and read-only.
#[derive(Debug, Clone)]
pub struct ResponseSystem {
    analyzer: TextAnalyzer,
    mappings: MappingTable,
}

impl ResponseSystem {
    pub fn new(analyzer: TextAnalyzer, mappings: MappingTable) -> Self {
        Self { analyzer, mappings }
    }

    /// Seed lexicon + mapping table loaded from the configured path
    /// (fail-soft to an empty table).
    pub fn from_config() -> Self {
        Self::new(TextAnalyzer::default(), MappingTable::load())
    }

    pub fn mappings(&self) -> &MappingTable {
        &self.mappings
    }

    /// Derive the context triple from an analysis record.
    pub fn context_of(analysis: &AnalysisResult) -> ResponseContext {
        ResponseContext {
            sentiment: analysis.sentiment.label,
            politeness: analysis.politeness.level,
            is_question: analysis.question.is_question,
        }
    }

    pub fn analyze(&self, input: &str) -> AnalysisResult {
        self.analyzer.analyze(input)
    }

    /// Full pipeline for one input: analysis, context, response selection.
    pub fn process(&self, input: &str) -> Reply {
        let analysis = self.analyzer.analyze(input);
        let ctx = Self::context_of(&analysis);
        Reply {
            response: respond::select_response(input, &ctx, &self.mappings),
        }
    }
}

impl Default for ResponseSystem {
    /// Seed lexicon and an empty mapping table.
    fn default() -> Self {
        Self::new(
            TextAnalyzer::new(LexiconConfig::seed().clone()),
            MappingTable::default(),
        )
    }
}
