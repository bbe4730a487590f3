//! # arogya-verify
//!
//! JSON Schema and invariant verification of serialized triage documents.
//!
//! The triage engine guarantees its output invariants by construction, but
//! a host consuming documents across a process boundary cannot rely on
//! that — this crate lets it re-check any document against the published
//! wire contract and the emergency invariant.
//!
//! ```rust,ignore
//! use arogya_verify::ContractVerifier;
//!
//! let verifier = ContractVerifier::new();
//! let report = verifier.verify(&document);
//! assert!(report.passed);
//! ```

pub mod engine;

pub use engine::{triage_document_schema, ContractVerifier};
