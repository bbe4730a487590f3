//! Emergency phrase detection.
//!
//! The first and highest-priority gate in the pipeline: if any emergency
//! phrase occurs in the normalized input, the engine emits the fixed
//! emergency result and nothing else runs — no extraction, no scoring.

use tracing::debug;

use arogya_knowledge::KnowledgeBase;

/// Return the first emergency phrase contained in `normalized`, testing
/// phrases in knowledge-table order. `None` when no phrase matches.
///
/// Order does not change whether an input is an emergency, only which
/// phrase is reported as the trigger.
pub fn first_emergency_match<'k>(
    normalized: &str,
    knowledge: &'k KnowledgeBase,
) -> Option<&'k str> {
    for phrase in knowledge.emergency_phrases() {
        if normalized.contains(phrase.as_str()) {
            debug!(phrase = %phrase, "emergency phrase matched");
            return Some(phrase);
        }
    }
    None
}

/// Return true if the normalized input contains any emergency phrase.
pub fn is_emergency(normalized: &str, knowledge: &KnowledgeBase) -> bool {
    first_emergency_match(normalized, knowledge).is_some()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
