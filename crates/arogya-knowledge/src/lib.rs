//! # arogya-knowledge
//!
//! TOML-driven, insertion-ordered triage knowledge tables for the AROGYA
//! runtime.
//!
//! The triage engine reads three tables: symptom→conditions,
//! symptom→medicines, and the emergency phrase list. All three are declared
//! in one TOML document and loaded once at startup into an immutable
//! `KnowledgeBase`; a bundled default document ships in the crate.
//!
//! Ordering is part of the contract: symptom rows and emergency phrases are
//! kept in declaration order so primary-symptom selection is deterministic.

pub mod base;
pub mod tables;

pub use base::KnowledgeBase;
pub use tables::{KnowledgeConfig, SymptomEntry};
