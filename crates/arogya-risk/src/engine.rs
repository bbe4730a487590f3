//! Risk report assembly.
//!
//! `assess` combines the per-factor sub-scores into a weighted total,
//! bands it, and attaches threshold-gated recommendations. The scoring is
//! deterministic for a fixed profile; only the report id and timestamp
//! differ between runs.

use chrono::Utc;
use tracing::debug;

use arogya_contracts::risk::{FactorScores, ReportId, RiskBand, RiskProfile, RiskReport};

use crate::factors;

/// Totals above this are very-high risk.
pub const VERY_HIGH_CUTOFF: f64 = 70.0;
/// Totals above this (and not above `VERY_HIGH_CUTOFF`) are high risk.
pub const HIGH_CUTOFF: f64 = 50.0;
/// Totals above this (and not above `HIGH_CUTOFF`) are moderate risk.
pub const MODERATE_CUTOFF: f64 = 30.0;

/// Map a weighted total score to its risk band. Cutoffs are exclusive
/// lower bounds.
pub fn band_for(total: f64) -> RiskBand {
    if total > VERY_HIGH_CUTOFF {
        RiskBand::VeryHigh
    } else if total > HIGH_CUTOFF {
        RiskBand::High
    } else if total > MODERATE_CUTOFF {
        RiskBand::Moderate
    } else {
        RiskBand::Low
    }
}

/// Score a patient profile into a `RiskReport`.
pub fn assess(profile: &RiskProfile) -> RiskReport {
    let age = factors::age_risk(profile.age);
    let bmi = factors::bmi_risk(profile.bmi);
    let blood_pressure = factors::blood_pressure_risk(profile.systolic, profile.diastolic);
    let cholesterol = factors::cholesterol_risk(profile.cholesterol);
    let lifestyle = factors::lifestyle_risk(profile.smoker, profile.diabetic);
    let family_history = factors::family_history_risk(profile.family_history.len());

    let total = age * factors::AGE_WEIGHT
        + bmi * factors::BMI_WEIGHT
        + blood_pressure * factors::BLOOD_PRESSURE_WEIGHT
        + cholesterol * factors::CHOLESTEROL_WEIGHT
        + lifestyle * factors::LIFESTYLE_WEIGHT
        + family_history * factors::FAMILY_HISTORY_WEIGHT;

    let total_score = round2(total);
    let band = band_for(total_score);

    debug!(total_score, band = %band, "risk assessment complete");

    RiskReport {
        id: ReportId::new(),
        generated_at: Utc::now(),
        total_score,
        band,
        factors: FactorScores {
            age: round2(age),
            bmi: round2(bmi),
            blood_pressure: round2(blood_pressure),
            cholesterol: round2(cholesterol),
            lifestyle: round2(lifestyle),
            family_history: round2(family_history),
        },
        recommendations: recommendations(total_score, profile),
    }
}

/// Threshold-gated entries followed by the general advice every report
/// carries.
fn recommendations(total_score: f64, profile: &RiskProfile) -> Vec<String> {
    let mut out = Vec::new();

    if total_score > HIGH_CUTOFF {
        out.push("Consult with a healthcare provider immediately".to_string());
        out.push("Consider comprehensive health screening".to_string());
    }
    if profile.bmi > 25.0 {
        out.push("Focus on weight management through diet and exercise".to_string());
    }
    if profile.systolic > 130 {
        out.push("Monitor blood pressure regularly and reduce sodium intake".to_string());
    }
    if profile.cholesterol > 200.0 {
        out.push("Follow a heart-healthy diet low in saturated fats".to_string());
    }
    if profile.smoker {
        out.push("Quit smoking - consider nicotine replacement therapy".to_string());
    }
    if profile.age > 40 {
        out.push("Schedule regular preventive health checkups".to_string());
    }

    out.extend(
        [
            "Maintain regular physical activity (150 minutes/week)",
            "Follow a balanced diet rich in fruits and vegetables",
            "Ensure adequate sleep (7-9 hours per night)",
            "Manage stress through relaxation techniques",
        ]
        .iter()
        .map(|s| s.to_string()),
    );

    out
}

/// Round to two decimals for reporting.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ── Tests ─────────────────────────────────────────────────────────────────────
