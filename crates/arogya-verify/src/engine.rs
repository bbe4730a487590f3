//! Wire-contract verifier for serialized triage documents.
//!
//! A host receiving a `TriageResult` over a process boundary holds an
//! untyped JSON document. `ContractVerifier` re-checks it in two phases:
//!
//! 1. **Structural** — the document is validated against the published
//!    JSON Schema for the triage wire contract using the `jsonschema`
//!    crate: required keys, enum spellings, confidence bounds, the
//!    three-medicine cap, and the non-empty recommendation list.
//! 2. **Semantic** — the cross-field emergency invariant is evaluated:
//!    an emergency document must be critical, immediate, confidence 95,
//!    and medicine-free.
//!
//! All failures are collected before returning so hosts see the full
//! failure set in one pass.

use serde_json::{json, Value};
use tracing::{debug, warn};

use arogya_contracts::verify::{VerificationFailure, VerificationReport};

/// The published JSON Schema for the triage wire contract.
///
/// Field names and enum spellings here mirror `TriageResult`'s serde
/// representation; the two must change together.
pub fn triage_document_schema() -> Value {
    json!({
        "type": "object",
        "required": [
            "condition",
            "severity",
            "urgency",
            "confidence",
            "emergency",
            "medicines",
            "recommendations"
        ],
        "properties": {
            "condition": { "type": "string" },
            "severity": { "enum": ["mild", "moderate", "severe", "critical"] },
            "urgency": { "enum": ["routine", "urgent", "immediate"] },
            "confidence": { "type": "integer", "minimum": 0, "maximum": 100 },
            "emergency": { "type": "boolean" },
            "medicines": {
                "type": "array",
                "items": { "type": "string" },
                "maxItems": 3
            },
            "recommendations": {
                "type": "array",
                "items": { "type": "string" },
                "minItems": 1
            }
        },
        "additionalProperties": false
    })
}

/// The AROGYA wire-contract verifier.
///
/// Stateless; construct once and verify any number of documents.
#[derive(Debug, Clone)]
pub struct ContractVerifier {
    schema: Value,
}

impl ContractVerifier {
    /// Create a verifier over the published triage document schema.
    pub fn new() -> Self {
        Self {
            schema: triage_document_schema(),
        }
    }

    /// Verify one document against the wire contract.
    ///
    /// Never fails: a malformed schema document (a build defect, not a
    /// caller error) degrades to a reported structural failure so the host
    /// still receives a complete report.
    pub fn verify(&self, document: &Value) -> VerificationReport {
        let mut failures: Vec<VerificationFailure> = Vec::new();

        // ── Phase 1: JSON Schema structural validation ────────────────────────
        match jsonschema::validator_for(&self.schema) {
            Ok(validator) => {
                for error in validator.iter_errors(document) {
                    let message =
                        format!("schema violation at {}: {}", error.instance_path, error);
                    warn!(%message, "structural validation failure");
                    failures.push(VerificationFailure {
                        rule_id: "json-schema".to_string(),
                        message,
                    });
                }
            }
            Err(e) => {
                let message = format!("invalid JSON Schema document: {e}");
                warn!(%message, "schema compilation failure");
                failures.push(VerificationFailure {
                    rule_id: "json-schema".to_string(),
                    message,
                });
            }
        }

        // ── Phase 2: Emergency invariant ─────────────────────────────────────
        //
        // Cross-field implications JSON Schema does not express directly:
        // emergency ⇒ critical / immediate / confidence 95 / no medicines.
        if document.get("emergency").and_then(Value::as_bool) == Some(true) {
            if document.get("severity").and_then(Value::as_str) != Some("critical") {
                failures.push(VerificationFailure {
                    rule_id: "emergency-severity".to_string(),
                    message: "emergency document must report severity 'critical'".to_string(),
                });
            }
            if document.get("urgency").and_then(Value::as_str) != Some("immediate") {
                failures.push(VerificationFailure {
                    rule_id: "emergency-urgency".to_string(),
                    message: "emergency document must report urgency 'immediate'".to_string(),
                });
            }
            if document.get("confidence").and_then(Value::as_u64) != Some(95) {
                failures.push(VerificationFailure {
                    rule_id: "emergency-confidence".to_string(),
                    message: "emergency document must report confidence 95".to_string(),
                });
            }
            let medicines_empty = document
                .get("medicines")
                .and_then(Value::as_array)
                .map(|a| a.is_empty())
                .unwrap_or(false);
            if !medicines_empty {
                failures.push(VerificationFailure {
                    rule_id: "emergency-medicines".to_string(),
                    message: "emergency document must not suggest medicines".to_string(),
                });
            }
        }

        let passed = failures.is_empty();
        debug!(passed, failure_count = failures.len(), "verification complete");

        VerificationReport { passed, failures }
    }
}

impl Default for ContractVerifier {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use arogya_contracts::triage::{Severity, TriageResult, Urgency};

    use super::ContractVerifier;

    // ── Builder helpers ───────────────────────────────────────────────────────

    fn valid_document() -> serde_json::Value {
        json!({
            "condition": "tension headache",
            "severity": "moderate",
            "urgency": "routine",
            "confidence": 85,
            "emergency": false,
            "medicines": ["Paracetamol", "Aspirin", "Ibuprofen"],
            "recommendations": ["Rest in a quiet, dark room"]
        })
    }

    fn emergency_document() -> serde_json::Value {
        json!({
            "condition": "Medical Emergency",
            "severity": "critical",
            "urgency": "immediate",
            "confidence": 95,
            "emergency": true,
            "medicines": [],
            "recommendations": ["Call 102 or 108 immediately"]
        })
    }

    fn failed_rule_ids(report: &arogya_contracts::verify::VerificationReport) -> Vec<&str> {
        report.failures.iter().map(|f| f.rule_id.as_str()).collect()
    }

    // ── Structural phase ─────────────────────────────────────────────────────

    #[test]
    fn well_formed_document_passes() {
        let report = ContractVerifier::new().verify(&valid_document());
        assert!(report.passed, "failures: {:?}", report.failures);
    }

    #[test]
    fn typed_result_document_passes() {
        // The document produced by the engine's own type must satisfy the
        // published schema.
        let result = TriageResult {
            condition: "viral infection".to_string(),
            severity: Severity::Mild,
            urgency: Urgency::Routine,
            confidence: 85,
            is_emergency: false,
            medicines: vec!["Paracetamol".to_string()],
            recommendations: vec!["Rest and stay hydrated".to_string()],
        };
        let report = ContractVerifier::new().verify(&result.to_document());
        assert!(report.passed, "failures: {:?}", report.failures);
    }

    #[test]
    fn missing_key_fails_structurally() {
        let mut document = valid_document();
        document.as_object_mut().unwrap().remove("urgency");

        let report = ContractVerifier::new().verify(&document);
        assert!(!report.passed);
        assert!(failed_rule_ids(&report).contains(&"json-schema"));
    }

    #[test]
    fn unknown_severity_spelling_fails() {
        let mut document = valid_document();
        document["severity"] = json!("Critical"); // wrong case

        let report = ContractVerifier::new().verify(&document);
        assert!(!report.passed);
    }

    #[test]
    fn confidence_out_of_bounds_fails() {
        let mut document = valid_document();
        document["confidence"] = json!(120);

        let report = ContractVerifier::new().verify(&document);
        assert!(!report.passed);
    }

    #[test]
    fn more_than_three_medicines_fails() {
        let mut document = valid_document();
        document["medicines"] = json!(["a", "b", "c", "d"]);

        let report = ContractVerifier::new().verify(&document);
        assert!(!report.passed);
    }

    #[test]
    fn empty_recommendations_fails() {
        let mut document = valid_document();
        document["recommendations"] = json!([]);

        let report = ContractVerifier::new().verify(&document);
        assert!(!report.passed);
    }

    #[test]
    fn renamed_emergency_key_fails() {
        // The wire key is "emergency"; "is_emergency" is the Rust field
        // name and must not leak into documents.
        let mut document = valid_document();
        let object = document.as_object_mut().unwrap();
        let flag = object.remove("emergency").unwrap();
        object.insert("is_emergency".to_string(), flag);

        let report = ContractVerifier::new().verify(&document);
        assert!(!report.passed);
    }

    // ── Semantic phase ───────────────────────────────────────────────────────

    #[test]
    fn consistent_emergency_document_passes() {
        let report = ContractVerifier::new().verify(&emergency_document());
        assert!(report.passed, "failures: {:?}", report.failures);
    }

    #[test]
    fn emergency_with_wrong_severity_fails_semantically() {
        let mut document = emergency_document();
        document["severity"] = json!("severe");

        let report = ContractVerifier::new().verify(&document);
        assert!(!report.passed);
        assert!(failed_rule_ids(&report).contains(&"emergency-severity"));
    }

    #[test]
    fn emergency_with_medicines_fails_semantically() {
        let mut document = emergency_document();
        document["medicines"] = json!(["Aspirin"]);

        let report = ContractVerifier::new().verify(&document);
        assert!(!report.passed);
        assert!(failed_rule_ids(&report).contains(&"emergency-medicines"));
    }

    #[test]
    fn inconsistent_emergency_accumulates_all_failures() {
        let document = json!({
            "condition": "Medical Emergency",
            "severity": "mild",
            "urgency": "routine",
            "confidence": 50,
            "emergency": true,
            "medicines": ["Paracetamol"],
            "recommendations": ["Rest"]
        });

        let report = ContractVerifier::new().verify(&document);
        let ids = failed_rule_ids(&report);
        assert!(ids.contains(&"emergency-severity"));
        assert!(ids.contains(&"emergency-urgency"));
        assert!(ids.contains(&"emergency-confidence"));
        assert!(ids.contains(&"emergency-medicines"));
    }

    #[test]
    fn non_emergency_document_skips_semantic_phase() {
        // severity "severe" with emergency=false is legal — the invariant
        // only binds emergency documents.
        let mut document = valid_document();
        document["severity"] = json!("severe");
        document["urgency"] = json!("urgent");

        let report = ContractVerifier::new().verify(&document);
        assert!(report.passed, "failures: {:?}", report.failures);
    }
}
