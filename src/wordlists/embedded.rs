//! Embedded data
//!
//! The word list is compiled in by the build script, the score tables are
//! included as raw JSON and decoded on load.

include!(concat!(env!("OUT_DIR"), "/words.rs"));

/// Default letter weights, `{ "letter": weight }`
pub const FREQUENCY_JSON: &str = include_str!("../../data/frequency.json");

/// Default precomputed word scores, `{ "word": score }`
pub const INFO_JSON: &str = include_str!("../../data/info.json");
