//! Wire-contract verification report types.
//!
//! Hosts that receive a serialized `TriageResult` across a process boundary
//! can re-check it with `arogya-verify`; these are the types that carry the
//! outcome back.

use serde::{Deserialize, Serialize};

/// The result of verifying one serialized triage document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// True only if the structural check and every invariant rule passed.
    pub passed: bool,
    /// All failures collected during this verification run. Empty on pass.
    pub failures: Vec<VerificationFailure>,
}

/// A single rule failure within a `VerificationReport`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationFailure {
    /// The identifier of the rule that failed.
    pub rule_id: String,
    /// Human-readable explanation of why the rule failed.
    pub message: String,
}
