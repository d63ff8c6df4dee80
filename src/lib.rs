// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod analyze;
pub mod chars;
pub mod lexicon;
pub mod respond;
pub mod segment;
pub mod system;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{AnalysisResult, Politeness, Sentiment, TextAnalyzer};
pub use crate::chars::{classify, CharClass};
pub use crate::lexicon::{LexiconConfig, WordPatterns, WordRuleTable};
pub use crate::respond::{
    select_response, ContextFilter, MappingEntry, MappingHandle, MappingTable, ResponseContext,
};
pub use crate::segment::WordSegmenter;
pub use crate::system::{Reply, ResponseSystem};
