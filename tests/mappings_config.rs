// tests/mappings_config.rs
//
// Fail-soft loading of the mapping table: env-var path override, missing
// and malformed files, and copy-and-swap reload through the handle.
// Env-var tests are serialized because the process environment is shared.

use serial_test::serial;
use std::fs;
use std::io::Write;

use thai_reply_engine::respond::ENV_MAPPINGS_PATH;
use thai_reply_engine::{MappingHandle, MappingTable, Politeness, ResponseContext, Sentiment};

const SAMPLE_JSON: &str = r#"{
    "mappings": [
        { "target": "สวัสดี", "replacement": "หวัดดี" },
        { "target": "ลาก่อน", "replacement": "แล้วพบกันใหม่",
          "context": { "isQuestion": false } }
    ]
}"#;

fn neutral_ctx() -> ResponseContext {
    ResponseContext {
        sentiment: Sentiment::Neutral,
        politeness: Politeness::Casual,
        is_question: false,
    }
}

#[test]
fn missing_file_degrades_to_empty_table() {
    let table = MappingTable::load_from_file("definitely/not/here.json");
    assert!(table.is_empty());
}

#[test]
fn malformed_file_degrades_to_empty_table() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"{ this is not json").expect("write");
    let table = MappingTable::load_from_file(file.path());
    assert!(table.is_empty());
}

#[test]
fn well_formed_file_loads_in_order() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE_JSON.as_bytes()).expect("write");
    let table = MappingTable::load_from_file(file.path());
    assert_eq!(table.len(), 2);
    assert_eq!(table.mappings[0].target, "สวัสดี");
    assert_eq!(table.mappings[1].target, "ลาก่อน");
    assert_eq!(
        table.mappings[1].context.unwrap().is_question,
        Some(false)
    );
}

#[test]
#[serial]
fn env_var_overrides_the_default_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE_JSON.as_bytes()).expect("write");

    std::env::set_var(ENV_MAPPINGS_PATH, file.path());
    let table = MappingTable::load();
    std::env::remove_var(ENV_MAPPINGS_PATH);

    assert_eq!(table.len(), 2);
}

#[test]
#[serial]
fn env_var_pointing_nowhere_degrades_to_empty() {
    std::env::set_var(ENV_MAPPINGS_PATH, "nope/missing.json");
    let table = MappingTable::load();
    std::env::remove_var(ENV_MAPPINGS_PATH);

    assert!(table.is_empty());
}

#[test]
fn handle_swap_is_visible_to_all_clones() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE_JSON.as_bytes()).expect("write");

    let handle = MappingHandle::new(MappingTable::default());
    let reader = handle.clone();
    assert!(reader.snapshot().is_empty());

    // Simulate what the reload thread does: parse then swap whole.
    let raw = fs::read_to_string(file.path()).expect("read");
    handle.swap(MappingTable::from_json_str(&raw).expect("parse"));

    assert_eq!(reader.snapshot().len(), 2);
    assert_eq!(reader.select("สวัสดี", &neutral_ctx()), "หวัดดี");
}
