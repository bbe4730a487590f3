//! Additive severity scoring.
//!
//! Each indicator phrase found in the normalized input contributes a fixed
//! weight; multiple indicators accumulate with no mutual exclusion, and the
//! total is clamped at 100. Two strictly-greater-than cutoffs map the score
//! to a severity/urgency pair.

use arogya_contracts::triage::{Severity, Urgency};

/// Indicator phrases and their point weights. Intensity words first, then
/// duration/onset words.
pub const SEVERITY_WEIGHTS: &[(&str, u32)] = &[
    ("severe", 30),
    ("intense", 25),
    ("unbearable", 35),
    ("mild", 10),
    ("slight", 5),
    ("days", 15),
    ("weeks", 25),
    ("sudden", 20),
];

/// Scores are clamped to this ceiling.
pub const MAX_SCORE: u32 = 100;

/// Severity scores above this are severe/urgent.
pub const SEVERE_CUTOFF: u32 = 70;

/// Severity scores above this (and not above `SEVERE_CUTOFF`) are
/// moderate/routine.
pub const MODERATE_CUTOFF: u32 = 40;

/// All indicator phrases contained in `normalized`, with their weights, in
/// table order. Exposed so frontends can show how a score was built.
pub fn matched_weights(normalized: &str) -> Vec<(&'static str, u32)> {
    SEVERITY_WEIGHTS
        .iter()
        .copied()
        .filter(|(phrase, _)| normalized.contains(phrase))
        .collect()
}

/// The clamped additive severity score for the normalized input.
pub fn severity_score(normalized: &str) -> u32 {
    let total: u32 = matched_weights(normalized)
        .iter()
        .map(|(_, weight)| weight)
        .sum();
    total.min(MAX_SCORE)
}

/// Map a severity score to its severity/urgency pair.
///
/// Cutoffs are exclusive lower bounds: a score of exactly 70 is moderate,
/// exactly 40 is mild. Only the severe band escalates urgency past routine.
pub fn classify(score: u32) -> (Severity, Urgency) {
    if score > SEVERE_CUTOFF {
        (Severity::Severe, Urgency::Urgent)
    } else if score > MODERATE_CUTOFF {
        (Severity::Moderate, Urgency::Routine)
    } else {
        (Severity::Mild, Urgency::Routine)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use arogya_contracts::triage::{Severity, Urgency};

    use super::{classify, matched_weights, severity_score};

    #[test]
    fn single_indicator_scores_its_weight() {
        assert_eq!(severity_score("mild headache"), 10);
        assert_eq!(severity_score("slight discomfort"), 5);
        assert_eq!(severity_score("sudden onset"), 20);
    }

    #[test]
    fn indicators_accumulate() {
        // severe (30) + days (15)
        assert_eq!(severity_score("severe headache for days"), 45);
        // unbearable (35) + sudden (20) + weeks (25)
        assert_eq!(
            severity_score("unbearable and sudden, going on for weeks"),
            80
        );
    }

    #[test]
    fn total_is_clamped_at_100() {
        // All eight indicators: 30+25+35+10+5+15+25+20 = 165.
        let text = "severe intense unbearable mild slight days weeks sudden";
        assert_eq!(severity_score(text), 100);
    }

    #[test]
    fn no_indicator_scores_zero() {
        assert_eq!(severity_score("headache"), 0);
        assert_eq!(severity_score(""), 0);
    }

    #[test]
    fn cutoffs_are_strict() {
        // Exactly 70 is still moderate; exactly 40 is still mild.
        assert_eq!(classify(70), (Severity::Moderate, Urgency::Routine));
        assert_eq!(classify(71), (Severity::Severe, Urgency::Urgent));
        assert_eq!(classify(40), (Severity::Mild, Urgency::Routine));
        assert_eq!(classify(41), (Severity::Moderate, Urgency::Routine));
        assert_eq!(classify(0), (Severity::Mild, Urgency::Routine));
        assert_eq!(classify(100), (Severity::Severe, Urgency::Urgent));
    }

    #[test]
    fn matched_weights_reports_contributions_in_table_order() {
        let matched = matched_weights("sudden severe pain");
        assert_eq!(matched, vec![("severe", 30), ("sudden", 20)]);
    }
}
