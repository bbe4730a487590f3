//! # arogya-contracts
//!
//! Shared types, wire contracts, and errors for the AROGYA triage runtime.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod error;
pub mod risk;
pub mod triage;
pub mod verify;

#[cfg(test)]
mod tests {
    use super::*;
    use error::ArogyaError;
    use risk::{ReportId, RiskBand, RiskProfile};
    use triage::{Severity, TriageResult, Urgency};

    // ── Builder helpers ──────────────────────────────────────────────────────

    fn sample_result() -> TriageResult {
        TriageResult {
            condition: "tension headache".to_string(),
            severity: Severity::Moderate,
            urgency: Urgency::Routine,
            confidence: 85,
            is_emergency: false,
            medicines: vec!["Paracetamol".to_string(), "Aspirin".to_string()],
            recommendations: vec!["Rest in a quiet, dark room".to_string()],
        }
    }

    // ── Wire contract ────────────────────────────────────────────────────────

    #[test]
    fn triage_result_wire_keys_match_contract() {
        let document = sample_result().to_document();

        // The host-facing contract names the emergency flag "emergency",
        // not "is_emergency".
        assert!(document.get("emergency").is_some());
        assert!(document.get("is_emergency").is_none());

        for key in [
            "condition",
            "severity",
            "urgency",
            "confidence",
            "medicines",
            "recommendations",
        ] {
            assert!(document.get(key).is_some(), "missing wire key '{}'", key);
        }
    }

    #[test]
    fn triage_result_round_trips() {
        let original = sample_result();
        let json = original.to_json_string();
        let decoded: TriageResult = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn severity_serializes_lowercase() {
        for (severity, expected) in [
            (Severity::Mild, "\"mild\""),
            (Severity::Moderate, "\"moderate\""),
            (Severity::Severe, "\"severe\""),
            (Severity::Critical, "\"critical\""),
        ] {
            assert_eq!(serde_json::to_string(&severity).unwrap(), expected);
            assert_eq!(format!("\"{}\"", severity), expected);
        }
    }

    #[test]
    fn urgency_serializes_lowercase() {
        for (urgency, expected) in [
            (Urgency::Routine, "\"routine\""),
            (Urgency::Urgent, "\"urgent\""),
            (Urgency::Immediate, "\"immediate\""),
        ] {
            assert_eq!(serde_json::to_string(&urgency).unwrap(), expected);
        }
    }

    #[test]
    fn risk_band_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&RiskBand::VeryHigh).unwrap(),
            "\"very-high\""
        );
        assert_eq!(RiskBand::VeryHigh.as_str(), "very-high");
    }

    // ── ReportId ─────────────────────────────────────────────────────────────

    #[test]
    fn report_id_new_produces_unique_values() {
        let ids: Vec<ReportId> = (0..100).map(|_| ReportId::new()).collect();

        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.0.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── RiskProfile defaults ─────────────────────────────────────────────────

    #[test]
    fn risk_profile_defaults_to_nominal_adult() {
        let profile = RiskProfile::default();
        assert_eq!(profile.age, 30);
        assert_eq!(profile.bmi, 25.0);
        assert_eq!(profile.systolic, 120);
        assert_eq!(profile.diastolic, 80);
        assert_eq!(profile.cholesterol, 200.0);
        assert!(!profile.smoker);
        assert!(!profile.diabetic);
        assert!(profile.family_history.is_empty());
    }

    // ── ArogyaError display messages ─────────────────────────────────────────

    #[test]
    fn error_config_error_display() {
        let err = ArogyaError::ConfigError {
            reason: "missing knowledge file".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing knowledge file"));
    }

    #[test]
    fn error_invalid_document_display() {
        let err = ArogyaError::InvalidDocument {
            reason: "expected value at line 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid document"));
        assert!(msg.contains("line 1"));
    }
}
