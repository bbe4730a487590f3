//! Red-flag identification.
//!
//! A separate scan over the input for concerning phrases that warrant a
//! doctor's attention even when the triage classification itself stays
//! routine. Red flags are advisory output for frontends; they never alter
//! the `TriageResult` wire document.

use crate::normalize::normalize;

/// Red-flag labels and the phrases that trigger them. A label is reported
/// at most once, in table order.
pub const RED_FLAG_PATTERNS: &[(&str, &[&str])] = &[
    (
        "high fever",
        &["fever above 104", "very high fever", "burning fever"],
    ),
    ("breathing difficulty", &["can't breathe", "gasping", "choking"]),
    (
        "severe pain",
        &["unbearable pain", "excruciating", "worst pain"],
    ),
    (
        "neurological",
        &["confusion", "loss of consciousness", "seizure"],
    ),
    ("bleeding", &["bleeding", "blood in", "hemorrhage"]),
];

/// All red-flag labels triggered by `input`, in table order.
///
/// Total over all strings; empty when nothing matches. Matching is
/// case-insensitive substring containment, like the rest of the pipeline.
pub fn identify_red_flags(input: &str) -> Vec<&'static str> {
    let normalized = normalize(input);
    RED_FLAG_PATTERNS
        .iter()
        .filter(|(_, patterns)| patterns.iter().any(|p| normalized.contains(p)))
        .map(|(label, _)| *label)
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::identify_red_flags;

    #[test]
    fn detects_single_flag() {
        assert_eq!(
            identify_red_flags("Very high fever since last night"),
            vec!["high fever"]
        );
    }

    #[test]
    fn detects_multiple_flags_in_table_order() {
        let flags = identify_red_flags("excruciating pain, some bleeding from the wound");
        assert_eq!(flags, vec!["severe pain", "bleeding"]);
    }

    #[test]
    fn label_reported_once_even_with_multiple_triggers() {
        // Two distinct neurological triggers, one label.
        let flags = identify_red_flags("confusion after the seizure");
        assert_eq!(flags, vec!["neurological"]);
    }

    #[test]
    fn clean_input_has_no_flags() {
        assert!(identify_red_flags("mild headache").is_empty());
        assert!(identify_red_flags("").is_empty());
    }
}
