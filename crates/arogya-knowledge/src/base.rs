//! Knowledge base loading and lookup.
//!
//! `KnowledgeBase` wraps a validated `KnowledgeConfig`.  Construct it once
//! at startup — from the bundled defaults or a TOML document — then share it
//! read-only (typically behind an `Arc`) for the lifetime of the process.
//! It is never mutated after construction, so concurrent readers need no
//! locking.

use std::path::Path;

use tracing::debug;

use arogya_contracts::error::{ArogyaError, ArogyaResult};

use crate::tables::{KnowledgeConfig, SymptomEntry};

/// The bundled default knowledge document. Its tables reproduce the
/// reference symptom/medicine/emergency data the engine ships with.
const DEFAULT_KNOWLEDGE: &str = include_str!("../knowledge/default.toml");

/// Immutable triage knowledge: symptom tables, emergency phrases, and the
/// generic recommendation fallback.
///
/// ```rust,ignore
/// use arogya_knowledge::KnowledgeBase;
///
/// let kb = KnowledgeBase::builtin();
/// let kb = KnowledgeBase::from_file(Path::new("knowledge/clinic.toml"))?;
/// ```
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    config: KnowledgeConfig,
}

impl KnowledgeBase {
    /// Parse `s` as TOML and build a validated `KnowledgeBase`.
    ///
    /// Returns `ArogyaError::ConfigError` if the TOML is malformed, does not
    /// match the `KnowledgeConfig` schema, or contains a symptom keyword
    /// that is empty or not fully lowercase (such a keyword could never
    /// match normalized input).
    pub fn from_toml_str(s: &str) -> ArogyaResult<Self> {
        let config: KnowledgeConfig =
            toml::from_str(s).map_err(|e| ArogyaError::ConfigError {
                reason: format!("failed to parse knowledge TOML: {}", e),
            })?;

        for entry in &config.symptoms {
            if entry.keyword.is_empty() {
                return Err(ArogyaError::ConfigError {
                    reason: "symptom entry has an empty keyword".to_string(),
                });
            }
            if entry.keyword.chars().any(|c| c.is_ascii_uppercase()) {
                return Err(ArogyaError::ConfigError {
                    reason: format!(
                        "symptom keyword '{}' must be lowercase to match normalized input",
                        entry.keyword
                    ),
                });
            }
        }

        debug!(
            symptom_count = config.symptoms.len(),
            emergency_phrase_count = config.emergency_phrases.len(),
            "knowledge base loaded"
        );

        Ok(Self { config })
    }

    /// Read the file at `path` and parse it as a TOML knowledge document.
    ///
    /// Returns `ArogyaError::ConfigError` if the file cannot be read or its
    /// contents fail `from_toml_str` validation.
    pub fn from_file(path: &Path) -> ArogyaResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ArogyaError::ConfigError {
            reason: format!("failed to read knowledge file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build the knowledge base from the bundled default document.
    ///
    /// # Panics
    ///
    /// Panics if the bundled document fails to parse — which cannot happen
    /// for a released build; the document is covered by tests.
    pub fn builtin() -> Self {
        Self::from_toml_str(DEFAULT_KNOWLEDGE)
            .expect("bundled knowledge document must parse and validate")
    }

    /// Ordered symptom rows, in declaration order.
    pub fn symptoms(&self) -> &[SymptomEntry] {
        &self.config.symptoms
    }

    /// Emergency trigger phrases, in declaration order.
    pub fn emergency_phrases(&self) -> &[String] {
        &self.config.emergency_phrases
    }

    /// The generic recommendation fallback set.
    pub fn generic_recommendations(&self) -> &[String] {
        &self.config.generic_recommendations
    }

    /// Look up a symptom row by its exact keyword.
    pub fn lookup(&self, keyword: &str) -> Option<&SymptomEntry> {
        self.config.symptoms.iter().find(|e| e.keyword == keyword)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::KnowledgeBase;

    #[test]
    fn builtin_document_parses() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.symptoms().len(), 5);
        assert_eq!(kb.emergency_phrases().len(), 7);
        assert_eq!(kb.generic_recommendations().len(), 3);
    }

    #[test]
    fn builtin_preserves_declaration_order() {
        let kb = KnowledgeBase::builtin();
        let keywords: Vec<&str> = kb.symptoms().iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(
            keywords,
            vec!["fever", "headache", "cough", "chest pain", "stomach pain"]
        );

        // Emergency phrases keep their declared order too.
        assert_eq!(kb.emergency_phrases()[0], "chest pain");
        assert_eq!(kb.emergency_phrases()[6], "heart attack");
    }

    #[test]
    fn builtin_tables_carry_expected_rows() {
        let kb = KnowledgeBase::builtin();

        let headache = kb.lookup("headache").unwrap();
        assert_eq!(headache.conditions[0], "tension headache");
        assert_eq!(
            headache.medicines,
            vec!["Paracetamol", "Aspirin", "Ibuprofen"]
        );
        assert_eq!(headache.recommendations.len(), 3);

        // chest pain and stomach pain have no dedicated recommendation set.
        assert!(kb.lookup("chest pain").unwrap().recommendations.is_empty());
        assert!(kb.lookup("stomach pain").unwrap().recommendations.is_empty());
    }

    #[test]
    fn lookup_unknown_keyword_returns_none() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.lookup("rash").is_none());
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = KnowledgeBase::from_toml_str("emergency_phrases = [").unwrap_err();
        assert!(err.to_string().contains("configuration error"));
    }

    #[test]
    fn uppercase_keyword_is_rejected() {
        let doc = r#"
emergency_phrases = []
generic_recommendations = ["Rest"]

[[symptoms]]
keyword = "Fever"
conditions = ["viral infection"]
medicines = ["Paracetamol"]
"#;
        let err = KnowledgeBase::from_toml_str(doc).unwrap_err();
        assert!(err.to_string().contains("lowercase"));
    }

    #[test]
    fn empty_keyword_is_rejected() {
        let doc = r#"
emergency_phrases = []
generic_recommendations = ["Rest"]

[[symptoms]]
keyword = ""
conditions = ["viral infection"]
medicines = ["Paracetamol"]
"#;
        let err = KnowledgeBase::from_toml_str(doc).unwrap_err();
        assert!(err.to_string().contains("empty keyword"));
    }

    #[test]
    fn from_file_missing_path_is_config_error() {
        let err =
            KnowledgeBase::from_file(std::path::Path::new("/nonexistent/knowledge.toml"))
                .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
