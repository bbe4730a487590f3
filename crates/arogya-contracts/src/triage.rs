//! Triage classification types and the wire contract.
//!
//! `TriageResult` is the single output record of the triage engine. Hosts
//! embedding the engine consume it as a serialized JSON document; the serde
//! representation here IS the wire contract, so field names and enum
//! spellings must not change without versioning the contract.

use serde::{Deserialize, Serialize};

/// How serious the reported symptoms are.
///
/// `Critical` is reserved for the emergency short-circuit — the severity
/// scorer itself never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
    Critical,
}

impl Severity {
    /// The wire spelling of this severity level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How quickly the patient should act on the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Routine,
    Urgent,
    Immediate,
}

impl Urgency {
    /// The wire spelling of this urgency level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Routine => "routine",
            Urgency::Urgent => "urgent",
            Urgency::Immediate => "immediate",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete output of one triage analysis.
///
/// Invariants every produced value satisfies:
///
/// - `is_emergency == true` implies `severity == Critical`,
///   `urgency == Immediate`, `confidence == 95`, and `medicines` is empty.
/// - `confidence` is within `[0, 100]`.
/// - `medicines` holds at most 3 entries, in relevance order.
/// - `recommendations` is never empty.
///
/// The engine guarantees these by construction; `arogya-verify` re-checks
/// them on the serialized document for hosts that receive results over a
/// process boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    /// The most probable condition for the primary symptom.
    pub condition: String,
    /// Severity classification from the additive scoring model.
    pub severity: Severity,
    /// Urgency classification paired with the severity.
    pub urgency: Urgency,
    /// Heuristic certainty in the classification, 0–100. Not a probability.
    pub confidence: u8,
    /// True when an emergency trigger phrase was detected. Serialized under
    /// the wire key `emergency`.
    #[serde(rename = "emergency")]
    pub is_emergency: bool,
    /// Up to 3 over-the-counter suggestions, most relevant first.
    pub medicines: Vec<String>,
    /// At least one actionable recommendation.
    pub recommendations: Vec<String>,
}

impl TriageResult {
    /// The result as an owned JSON document — the value a host consumes
    /// across the serialization boundary. Ownership transfers to the caller;
    /// there is no cleanup handshake.
    ///
    /// # Panics
    ///
    /// Panics if serialization fails — which cannot happen for the
    /// well-formed `TriageResult` type.
    pub fn to_document(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("TriageResult must always be serializable to JSON")
    }

    /// The result serialized to a compact JSON string.
    ///
    /// # Panics
    ///
    /// Panics if serialization fails — which cannot happen for the
    /// well-formed `TriageResult` type.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).expect("TriageResult must always be serializable to JSON")
    }
}
