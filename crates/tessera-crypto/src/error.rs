//! Error types for the primitive layer.
//!
//! Every failure here is either a caller bug (a violated precondition) or an
//! engine fault. Neither is recoverable at this layer; the distinction exists
//! so the host can decide how loudly to terminate.

use thiserror::Error;

/// Errors from Tessera cryptographic primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// A precondition on the inputs was violated
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the input
        reason: String,
    },

    /// The digest, HMAC or entropy engine reported a failure
    #[error("engine failure: {reason}")]
    EngineFailure {
        /// Description of the underlying fault
        reason: String,
    },

    /// The entropy source did not report itself seeded
    #[error("secure randomness source is not seeded")]
    UnseededRandomness,

    /// A rejection-sampling or candidate-search loop hit its cap
    #[error("{operation} exhausted after {attempts} attempts")]
    SamplingExhausted {
        /// Operation that gave up
        operation: &'static str,
        /// Number of attempts made before giving up
        attempts: u64,
    },
}

impl CryptoError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument { reason: reason.into() }
    }

    pub(crate) fn engine(reason: impl Into<String>) -> Self {
        Self::EngineFailure { reason: reason.into() }
    }

    /// Returns true if this error was caused by the caller violating a
    /// precondition.
    ///
    /// Engine faults, an unseeded RNG and exhausted sampling loops are
    /// environment problems, not caller bugs.
    pub fn is_caller_bug(&self) -> bool {
        match self {
            Self::InvalidArgument { .. } => true,

            Self::EngineFailure { .. } => false,
            Self::UnseededRandomness => false,
            Self::SamplingExhausted { .. } => false,
        }
    }
}
