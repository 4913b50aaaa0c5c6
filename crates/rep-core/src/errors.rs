//! Cross-cutting error types for RepSeed.
//!
//! Only structurally invalid input documents are errors. Per-class and
//! per-field problems (broken ancestry, unmappable types, unresolved enums)
//! degrade the output instead and never surface here. Configuration errors
//! live in `rep-config`; the CLI converges everything into `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The seed document lacks the structure needed to establish a baseline.
    #[error("Malformed seed document: {reason}")]
    MalformedSeed { reason: String },

    /// The scan document lacks its class table or has an unreadable class record.
    #[error("Malformed scan document: {reason}")]
    MalformedScan { reason: String },

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
