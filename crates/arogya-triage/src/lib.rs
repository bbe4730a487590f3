//! # arogya-triage
//!
//! Deterministic rule-based symptom triage engine for the AROGYA runtime.
//!
//! This crate provides:
//! - The staged classification pipeline (normalize, emergency check,
//!   symptom extraction, severity scoring, assembly)
//! - The `TriageEngine` entry point over a shared `KnowledgeBase`
//! - The red-flag scanner frontends can surface alongside triage results
//!
//! ## Usage
//!
//! ```rust,ignore
//! use arogya_triage::TriageEngine;
//!
//! let engine = TriageEngine::with_builtin_knowledge();
//! let result = engine.analyze("severe headache for days");
//! let document = result.to_document();
//! ```

pub mod emergency;
pub mod engine;
pub mod extract;
pub mod flags;
pub mod normalize;
pub mod score;

pub use engine::TriageEngine;
pub use flags::identify_red_flags;
pub use normalize::normalize;
