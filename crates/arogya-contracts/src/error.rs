//! Error types for the AROGYA runtime.
//!
//! The triage engine itself is total: `analyze` cannot fail for any input
//! string. Errors exist only at the boundaries — loading knowledge tables
//! from configuration and handing documents across the serialization
//! boundary. Fallible operations return `ArogyaResult<T>`.

use thiserror::Error;

/// The unified error type for the AROGYA runtime.
#[derive(Debug, Error)]
pub enum ArogyaError {
    /// A knowledge-table document is missing, unreadable, or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A document handed across the serialization boundary could not be
    /// parsed as JSON at all. Documents that parse but violate the wire
    /// contract are reported through `VerificationReport`, not this error.
    #[error("invalid document: {reason}")]
    InvalidDocument { reason: String },
}

/// Convenience alias used throughout the AROGYA crates.
pub type ArogyaResult<T> = Result<T, ArogyaError>;
