//! # arogya-risk
//!
//! Weighted multi-factor health risk assessment for the AROGYA runtime.
//!
//! Scores a `RiskProfile` (age, BMI, blood pressure, cholesterol,
//! lifestyle, family history) into a banded `RiskReport` with per-factor
//! breakdown and threshold-gated recommendations. Pure computation — no
//! I/O, no shared state.

pub mod engine;
pub mod factors;

pub use engine::{assess, band_for};
