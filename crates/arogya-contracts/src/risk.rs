//! Health risk assessment types.
//!
//! A `RiskProfile` carries the patient measurements the risk engine scores;
//! a `RiskReport` is the scored output. Unlike triage, a report is a
//! standalone artifact a host may file away, so it carries its own identity
//! and generation timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a single generated risk report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub uuid::Uuid);

impl ReportId {
    /// Create a new, unique report ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

/// Patient measurements and history the risk engine scores.
///
/// Field defaults match a nominal healthy adult, so partial profiles can be
/// built with struct-update syntax from `RiskProfile::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Age in years.
    pub age: u32,
    /// Body mass index.
    pub bmi: f64,
    /// Systolic blood pressure, mmHg.
    pub systolic: u32,
    /// Diastolic blood pressure, mmHg.
    pub diastolic: u32,
    /// Total cholesterol, mg/dL.
    pub cholesterol: f64,
    /// Current smoker.
    pub smoker: bool,
    /// Diagnosed diabetic.
    pub diabetic: bool,
    /// Relevant family history entries (e.g. "heart_disease", "diabetes").
    pub family_history: Vec<String>,
}

impl Default for RiskProfile {
    fn default() -> Self {
        Self {
            age: 30,
            bmi: 25.0,
            systolic: 120,
            diastolic: 80,
            cholesterol: 200.0,
            smoker: false,
            diabetic: false,
            family_history: Vec::new(),
        }
    }
}

/// Overall risk classification derived from the weighted total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskBand {
    /// The wire spelling of this risk band.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Moderate => "moderate",
            RiskBand::High => "high",
            RiskBand::VeryHigh => "very-high",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-factor sub-scores contributing to the weighted total.
///
/// Each sub-score is the raw (unweighted) factor value, rounded to two
/// decimals, so hosts can show which factor drives the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub age: f64,
    pub bmi: f64,
    pub blood_pressure: f64,
    pub cholesterol: f64,
    pub lifestyle: f64,
    pub family_history: f64,
}

/// The scored output of one risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Identity of this report.
    pub id: ReportId,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Weighted total risk score, 0–100, rounded to two decimals.
    pub total_score: f64,
    /// Risk band the total score falls into.
    pub band: RiskBand,
    /// Raw sub-scores per factor.
    pub factors: FactorScores,
    /// Personalized recommendations, threshold-gated plus general entries.
    pub recommendations: Vec<String>,
}
