//! Symptom extraction.
//!
//! Scans the knowledge table in declaration order and collects every
//! symptom whose keyword occurs in the normalized input. The first entry of
//! the returned list is the primary symptom — a purely positional tie-break,
//! which is why table order is part of the knowledge contract.

use arogya_knowledge::{KnowledgeBase, SymptomEntry};

/// All symptom rows whose keyword is contained in `normalized`, in table
/// declaration order. Empty when nothing matches.
pub fn extract_symptoms<'k>(
    normalized: &str,
    knowledge: &'k KnowledgeBase,
) -> Vec<&'k SymptomEntry> {
    knowledge
        .symptoms()
        .iter()
        .filter(|entry| normalized.contains(entry.keyword.as_str()))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use arogya_knowledge::KnowledgeBase;

    use super::extract_symptoms;

    #[test]
    fn finds_single_symptom() {
        let kb = KnowledgeBase::builtin();
        let matched = extract_symptoms("pounding headache since lunch", &kb);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].keyword, "headache");
    }

    #[test]
    fn finds_multiple_symptoms_in_table_order() {
        let kb = KnowledgeBase::builtin();
        // Input mentions cough before fever, but fever precedes cough in the
        // table — table order wins.
        let matched = extract_symptoms("dry cough and a low fever", &kb);
        let keywords: Vec<&str> = matched.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["fever", "cough"]);
    }

    #[test]
    fn multi_word_keywords_match_as_substrings() {
        let kb = KnowledgeBase::builtin();
        let matched = extract_symptoms("sharp stomach pain after eating", &kb);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].keyword, "stomach pain");
    }

    #[test]
    fn no_match_returns_empty() {
        let kb = KnowledgeBase::builtin();
        assert!(extract_symptoms("sore elbow", &kb).is_empty());
        assert!(extract_symptoms("", &kb).is_empty());
    }
}
