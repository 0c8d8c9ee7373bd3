//! Style resolution error taxonomy.
//!
//! Every pipeline stage reports failure through one of these kinds; the
//! pipeline short-circuits on the first failure and nothing retries. The
//! external caller maps kinds to user-facing responses via `http_status`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the style resolution pipeline.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The input string does not parse into a usable style reference.
    #[error("invalid style identifier {input:?}: {reason}")]
    InvalidIdentifier { input: String, reason: String },

    /// Short name is absent from both the independent and dependent registries.
    #[error("style not found: {0:?}")]
    StyleNotFound(String),

    /// A dependent stylesheet does not declare a resolvable parent link.
    #[error("cannot resolve dependent style {short_name:?}: {reason}")]
    DependentResolution { short_name: String, reason: String },

    /// The underlying storage read for a named style failed.
    #[error("failed to read style file {}: {}", .path.display(), .source)]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The identifier points at a host other than the canonical style host.
    #[error("unsupported style source host {host:?}: only canonical-host styles can be fetched")]
    UnsupportedSource { host: String },

    /// The fetch stage reached a still-dependent identifier. The caller did
    /// not run resolution to completion; surfaced instead of dropping the
    /// request on the floor.
    #[error("fetch reached unresolved dependent style {short_name:?}")]
    InternalFallthrough { short_name: String },
}

impl StyleError {
    /// HTTP status the external caller should map this error to.
    /// Only `StyleNotFound` is a client-facing 404; everything else is a
    /// server-side failure.
    pub fn http_status(&self) -> u16 {
        match self {
            StyleError::StyleNotFound(_) => 404,
            _ => 500,
        }
    }
}
