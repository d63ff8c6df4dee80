//! # Character Classification
//!
//! Classifies a single Unicode scalar into one of the Thai character classes
//! using fixed code-point range tests over the Thai block (U+0E00–U+0E7F).
//! Total over all scalars; anything outside the ranges and the special-mark
//! set is `Other`.

use serde::Serialize;

/// Character class of one Unicode scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Consonant,
    Vowel,
    Tone,
    Special,
    Other,
}

/// Repeat marker, abbreviation marker, currency sign, and combining signs.
///
/// The range checks in [`classify`] run first, so ๆ, ฿ and the combining
/// tone signs in this set resolve as vowel/tone; the set effectively
/// catches ฯ and ์.
pub const SPECIAL_MARKS: [char; 9] = ['ๆ', 'ฯ', '฿', '็', '์', '่', '้', '๊', '๋'];

/// Classify one scalar. Checks run consonant → vowel → tone → special.
pub fn classify(ch: char) -> CharClass {
    let code = ch as u32;
    if (0x0E01..=0x0E2E).contains(&code) {
        CharClass::Consonant
    } else if (0x0E30..=0x0E46).contains(&code) {
        CharClass::Vowel
    } else if (0x0E47..=0x0E4B).contains(&code) {
        CharClass::Tone
    } else if SPECIAL_MARKS.contains(&ch) {
        CharClass::Special
    } else {
        CharClass::Other
    }
}
