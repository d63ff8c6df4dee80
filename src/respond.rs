//! # Response Matching
//!
//! Mapping-table schema, confidence scoring, default replies, and a
//! thread-safe handle with copy-and-swap reload.
//!
//! Confidence per entry:
//! - exact `target == input` → 1.0
//! - mutual substring containment → 0.5 + 0.1 per context field that is
//!   present on the entry *and* equals the derived context
//! - otherwise → 0.0
//!
//! The running best is replaced only on a strictly greater confidence, so
//! ties keep the earliest entry. A best of zero falls back to a fixed
//! default chosen on (is_question, very polite).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};

use crate::analyze::{Politeness, Sentiment};

// --- env defaults & names ---
pub const DEFAULT_MAPPINGS_PATH: &str = "config/mappings.json";
pub const ENV_MAPPINGS_PATH: &str = "MAPPINGS_CONFIG_PATH";
pub const ENV_MAPPINGS_HOT_RELOAD: &str = "MAPPINGS_HOT_RELOAD";

/// Derived per-input context used for bonus scoring and default replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseContext {
    pub sentiment: Sentiment,
    pub politeness: Politeness,
    pub is_question: bool,
}

/// Optional context filter on a mapping entry.
///
/// Each field is independently optional: present means must-match for the
/// 0.1 bonus, absent means ignored. Collapsing this into one flag would
/// change scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub politeness: Option<Politeness>,
    #[serde(default, rename = "isQuestion", skip_serializing_if = "Option::is_none")]
    pub is_question: Option<bool>,
}

/// One canned-reply mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub target: String,
    pub replacement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextFilter>,
}

/// Ordered mapping table, shaped as `{ "mappings": [...] }` on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingTable {
    #[serde(default)]
    pub mappings: Vec<MappingEntry>,
}

impl MappingTable {
    /// Parse a mapping table from a JSON string.
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load from `MAPPINGS_CONFIG_PATH`, or `config/mappings.json` by default.
    pub fn load() -> Self {
        let path = std::env::var(ENV_MAPPINGS_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MAPPINGS_PATH));
        Self::load_from_file(path)
    }

    /// Load a mapping table from a JSON file.
    /// A missing or malformed file degrades to an empty table; the core
    /// never fails because of configuration.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(raw) => match Self::from_json_str(&raw) {
                Ok(table) => {
                    info!(count = table.mappings.len(), "loaded response mappings");
                    table
                }
                Err(err) => {
                    warn!(%err, "malformed mappings file; using empty table");
                    Self::default()
                }
            },
            Err(err) => {
                warn!(%err, "unreadable mappings file; using empty table");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// Confidence of `entry` against `input` and its derived `ctx`.
pub fn confidence(input: &str, entry: &MappingEntry, ctx: &ResponseContext) -> f32 {
    if entry.target == input {
        return 1.0;
    }
    if input.contains(entry.target.as_str()) || entry.target.contains(input) {
        let mut confidence = 0.5;
        if let Some(filter) = &entry.context {
            if filter.sentiment == Some(ctx.sentiment) {
                confidence += 0.1;
            }
            if filter.politeness == Some(ctx.politeness) {
                confidence += 0.1;
            }
            if filter.is_question == Some(ctx.is_question) {
                confidence += 0.1;
            }
        }
        return confidence;
    }
    0.0
}

/// Pick the replacement of the highest-confidence entry, or a context
/// default when nothing scores above zero. First entry wins ties.
pub fn select_response(input: &str, ctx: &ResponseContext, table: &MappingTable) -> String {
    let mut best: Option<&MappingEntry> = None;
    let mut highest = 0.0f32;

    for entry in &table.mappings {
        let c = confidence(input, entry, ctx);
        if c > highest {
            highest = c;
            best = Some(entry);
        }
    }

    match best {
        Some(entry) => entry.replacement.clone(),
        None => default_response(ctx).to_string(),
    }
}

/// Fixed fallback replies on (is_question, politeness == very polite).
pub fn default_response(ctx: &ResponseContext) -> &'static str {
    let very_polite = ctx.politeness == Politeness::VeryPolite;
    if ctx.is_question {
        if very_polite {
            "ขออภัยค่ะ/ครับ ดิฉัน/ผมไม่แน่ใจในคำตอบ กรุณาถามใหม่อีกครั้ง"
        } else {
            "ขอโทษนะ ไม่แน่ใจ ลองถามใหม่ได้ไหม"
        }
    } else if very_polite {
        "ขอบคุณที่แจ้งให้ทราบค่ะ/ครับ"
    } else {
        "เข้าใจแล้ว ขอบคุณนะ"
    }
}

/* ----------------------------
Thread-safe handle + hot reload
---------------------------- */

/// Clonable handle over the mapping table. Reload is copy-and-swap: readers
/// in flight keep a consistent table, writers replace it whole.
/// Hot reload is opt-in via MAPPINGS_HOT_RELOAD=1.
#[derive(Clone)]
pub struct MappingHandle {
    inner: Arc<RwLock<MappingTable>>,
}

impl MappingHandle {
    pub fn new(table: MappingTable) -> Self {
        Self {
            inner: Arc::new(RwLock::new(table)),
        }
    }

    /// Clone of the current table.
    pub fn snapshot(&self) -> MappingTable {
        self.inner.read().map(|t| t.clone()).unwrap_or_default()
    }

    /// Replace the whole table.
    pub fn swap(&self, table: MappingTable) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = table;
        }
    }

    /// Select a response against the current table.
    pub fn select(&self, input: &str, ctx: &ResponseContext) -> String {
        if let Ok(table) = self.inner.read() {
            select_response(input, ctx, &table)
        } else {
            default_response(ctx).to_string()
        }
    }
}

fn hot_reload_enabled() -> bool {
    std::env::var(ENV_MAPPINGS_HOT_RELOAD).ok().as_deref() == Some("1")
}

/// Start a polling watcher on `path` that swaps new tables into `handle`.
/// Polls mtime every 2s. Uses only std, no external deps.
pub fn start_hot_reload_thread(handle: MappingHandle, path: PathBuf) {
    if !hot_reload_enabled() {
        return;
    }

    thread::spawn(move || {
        let poll = Duration::from_secs(2);
        let mut last_mtime: Option<SystemTime> = None;

        loop {
            match fs::metadata(&path).and_then(|m| m.modified()) {
                Ok(mtime) => {
                    let changed = match last_mtime {
                        None => {
                            last_mtime = Some(mtime);
                            false
                        }
                        Some(prev) => mtime > prev,
                    };
                    if changed {
                        if let Ok(raw) = fs::read_to_string(&path) {
                            match MappingTable::from_json_str(&raw) {
                                Ok(table) => {
                                    info!(count = table.len(), "hot-reloaded response mappings");
                                    handle.swap(table);
                                }
                                Err(err) => {
                                    warn!(%err, "hot reload skipped malformed mappings");
                                }
                            }
                        }
                        last_mtime = Some(mtime);
                    }
                }
                Err(_) => {
                    // File missing or unreadable; keep trying.
                }
            }
            thread::sleep(poll);
        }
    });
}
