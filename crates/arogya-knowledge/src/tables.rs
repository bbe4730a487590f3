//! Knowledge table types and configuration schema.
//!
//! A `KnowledgeConfig` is deserialized from TOML and holds the ordered
//! symptom entries, the emergency phrase list, and the generic
//! recommendation fallback.  `[[symptoms]]` is an array of tables, so
//! deserialization preserves declaration order — "first extracted symptom"
//! is reproducible across processes and runs.

use serde::{Deserialize, Serialize};

/// One symptom row: a lowercase keyword mapped to its candidate conditions,
/// medicine suggestions, and (optionally) a dedicated recommendation set.
///
/// Entries are matched by substring containment against normalized input,
/// in the order they appear in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomEntry {
    /// Lowercase keyword tested against normalized input. A keyword with
    /// uppercase characters can never match and is rejected at load time.
    pub keyword: String,

    /// Candidate conditions, relevance-ranked. The first entry becomes the
    /// reported condition when this symptom is primary.
    pub conditions: Vec<String>,

    /// Over-the-counter suggestions, relevance-ranked. The engine reports at
    /// most the first three.
    pub medicines: Vec<String>,

    /// Recommendation set used when this symptom is primary. Empty means
    /// "no dedicated set" — the engine falls back to the generic set.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// The top-level structure deserialized from a TOML knowledge document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Emergency trigger phrases, tested in list order by substring
    /// containment. Any match short-circuits the whole pipeline.
    pub emergency_phrases: Vec<String>,

    /// The recommendation set for no-match results and for primary symptoms
    /// without a dedicated set.
    pub generic_recommendations: Vec<String>,

    /// Ordered symptom rows. Earlier entries win primary-symptom selection.
    pub symptoms: Vec<SymptomEntry>,
}
