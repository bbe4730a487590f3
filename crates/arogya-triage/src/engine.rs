//! The AROGYA triage engine: the deterministic classification pipeline.
//!
//! Every analysis runs the same staged pipeline:
//!
//!   Normalize → Emergency check → Symptom extraction → Severity scoring → Assembly
//!
//! The emergency short-circuit is absolute: when an emergency phrase is
//! present, the fixed emergency result is emitted and no extraction or
//! scoring runs. Otherwise assembly picks one of two terminal shapes —
//! the no-match fallback, or the primary-match result built from the first
//! extracted symptom.
//!
//! `analyze` is total and pure: it performs no I/O, holds no mutable state,
//! and returns an identical result for an identical input. The knowledge
//! base is shared read-only, so one engine serves any number of threads
//! without locking.

use std::sync::Arc;

use tracing::{debug, warn};

use arogya_contracts::triage::{Severity, TriageResult, Urgency};
use arogya_knowledge::KnowledgeBase;

use crate::{emergency, extract, normalize::normalize, score};

/// Condition reported on the emergency short-circuit path.
const EMERGENCY_CONDITION: &str = "Medical Emergency";

/// Confidence reported on the emergency short-circuit path.
const EMERGENCY_CONFIDENCE: u8 = 95;

/// Fixed recommendation set for the emergency result.
const EMERGENCY_RECOMMENDATIONS: [&str; 3] = [
    "Call 102 or 108 immediately",
    "Go to nearest emergency room",
    "Do not delay medical care",
];

/// Condition reported when no symptom keyword matches.
const NO_MATCH_CONDITION: &str = "General health concern";

/// Confidence reported when no symptom keyword matches.
const NO_MATCH_CONFIDENCE: u8 = 50;

/// The single medicine suggested on the no-match path.
const NO_MATCH_MEDICINE: &str = "Paracetamol";

/// Condition reported when a matched symptom row has an empty condition
/// list. A well-formed knowledge table never produces this.
const UNKNOWN_CONDITION: &str = "Unknown condition";

/// Prepended to the recommendations whenever the severity is severe.
const SEVERE_ESCALATION: &str = "Seek immediate medical attention";

/// At most this many medicines are reported.
const MAX_MEDICINES: usize = 3;

/// Confidence model for primary-match results:
/// `min(BASE + PER_SYMPTOM * distinct_matches, CAP)`.
const BASE_CONFIDENCE: u32 = 80;
const CONFIDENCE_PER_SYMPTOM: u32 = 5;
const CONFIDENCE_CAP: u32 = 95;

/// The stateless triage engine.
///
/// Construct once per process with `with_builtin_knowledge` (or `new` with
/// a custom `KnowledgeBase`), share it freely, and drop it to release it —
/// there is no separate shutdown call, and the borrow checker rejects use
/// after drop.
///
/// ```rust,ignore
/// use arogya_triage::TriageEngine;
///
/// let engine = TriageEngine::with_builtin_knowledge();
/// let result = engine.analyze("severe headache for days");
/// ```
#[derive(Debug, Clone)]
pub struct TriageEngine {
    knowledge: Arc<KnowledgeBase>,
}

impl TriageEngine {
    /// Create an engine over an already-loaded knowledge base.
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    /// Create an engine over the bundled default knowledge tables.
    pub fn with_builtin_knowledge() -> Self {
        Self::new(Arc::new(KnowledgeBase::builtin()))
    }

    /// The knowledge base this engine classifies against.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Classify a free-text symptom description.
    ///
    /// Total over all inputs: the empty string, unmatched text, and
    /// malformed tables all produce a valid fallback result rather than an
    /// error. Calling twice with the same input yields identical results.
    pub fn analyze(&self, symptoms: &str) -> TriageResult {
        // ── Stage 1: Normalize ───────────────────────────────────────────────
        let normalized = normalize(symptoms);

        debug!(input_bytes = symptoms.len(), "triage analysis starting");

        // ── Stage 2: Emergency check ─────────────────────────────────────────
        //
        // Highest priority: any emergency phrase bypasses extraction and
        // scoring entirely.
        if let Some(phrase) = emergency::first_emergency_match(&normalized, &self.knowledge) {
            warn!(trigger = %phrase, "emergency detected; short-circuiting pipeline");
            return self.emergency_result();
        }

        // ── Stage 3: Symptom extraction ──────────────────────────────────────
        let matched = extract::extract_symptoms(&normalized, &self.knowledge);
        if matched.is_empty() {
            debug!("no symptom keyword matched; emitting fallback result");
            return self.no_match_result();
        }

        // ── Stage 4: Severity scoring ────────────────────────────────────────
        //
        // Scored over the entire input, independent of which symptom ends up
        // primary.
        let severity_score = score::severity_score(&normalized);
        let (severity, urgency) = score::classify(severity_score);

        // ── Stage 5: Assembly ────────────────────────────────────────────────
        let primary = matched[0];

        let condition = match primary.conditions.first() {
            Some(condition) => condition.clone(),
            None => {
                warn!(
                    keyword = %primary.keyword,
                    "symptom row has no conditions; reporting unknown condition"
                );
                UNKNOWN_CONDITION.to_string()
            }
        };

        let medicines: Vec<String> = primary
            .medicines
            .iter()
            .take(MAX_MEDICINES)
            .cloned()
            .collect();

        let confidence =
            (BASE_CONFIDENCE + CONFIDENCE_PER_SYMPTOM * matched.len() as u32).min(CONFIDENCE_CAP);

        let mut recommendations = Vec::new();
        if severity == Severity::Severe {
            recommendations.push(SEVERE_ESCALATION.to_string());
        }
        let set = if primary.recommendations.is_empty() {
            self.knowledge.generic_recommendations()
        } else {
            &primary.recommendations
        };
        recommendations.extend(set.iter().cloned());

        debug!(
            primary_symptom = %primary.keyword,
            matched_count = matched.len(),
            severity_score,
            severity = %severity,
            urgency = %urgency,
            confidence,
            "triage analysis complete"
        );

        TriageResult {
            condition,
            severity,
            urgency,
            confidence: confidence as u8,
            is_emergency: false,
            medicines,
            recommendations,
        }
    }

    /// The fixed result for the emergency short-circuit.
    fn emergency_result(&self) -> TriageResult {
        TriageResult {
            condition: EMERGENCY_CONDITION.to_string(),
            severity: Severity::Critical,
            urgency: Urgency::Immediate,
            confidence: EMERGENCY_CONFIDENCE,
            is_emergency: true,
            medicines: Vec::new(),
            recommendations: EMERGENCY_RECOMMENDATIONS
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }

    /// The fallback result when no symptom keyword matches.
    fn no_match_result(&self) -> TriageResult {
        TriageResult {
            condition: NO_MATCH_CONDITION.to_string(),
            severity: Severity::Mild,
            urgency: Urgency::Routine,
            confidence: NO_MATCH_CONFIDENCE,
            is_emergency: false,
            medicines: vec![NO_MATCH_MEDICINE.to_string()],
            recommendations: self
                .knowledge
                .generic_recommendations()
                .iter()
                .cloned()
                .collect(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
