//! Error taxonomy for DNA generation and decoding

use thiserror::Error;

use crate::GENERIC_FAILURE;

/// Everything that can go wrong between an fid and a trait record.
///
/// All variants are local and recoverable by the caller. Re-running with the
/// same input reproduces the same error, so nothing here is ever retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnaError {
    /// Identity absent, non-positive or not an integer
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    /// Raw hex shorter than the furthest trait window
    #[error("truncated digest: need {required} hex chars, got {actual}")]
    TruncatedDigest { required: usize, actual: usize },

    /// A reserved window holds something other than hex digits
    #[error("malformed digest: window {window:?} at offset {offset} is not hex")]
    MalformedDigest { offset: usize, window: String },
}

impl DnaError {
    /// Stable code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidIdentity(_) => "R101_INVALID_IDENTITY",
            Self::TruncatedDigest { .. } => "R102_TRUNCATED_DIGEST",
            Self::MalformedDigest { .. } => "R103_MALFORMED_DIGEST",
        }
    }

    /// What a user gets to see. Condition names stay in the logs.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE
    }
}
