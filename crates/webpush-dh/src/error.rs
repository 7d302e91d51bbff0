//! Error types for key handling and agreement

use thiserror::Error;

/// Errors from key-pair handling and ECDH agreement
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Raw key material has the wrong length
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required length for this key half
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Public key bytes do not encode a point on P-256
    #[error("invalid public key: not an uncompressed point on P-256")]
    InvalidCurvePoint,

    /// Private key bytes are not a usable scalar (zero or out of range)
    #[error("invalid private key: scalar out of range for P-256")]
    InvalidScalar,

    /// A key half required for the operation was never set
    #[error("missing {which} key for ECDH")]
    MissingKey {
        /// Which key half was absent
        which: &'static str,
    },
}

impl KeyError {
    /// Returns true if the caller can recover by rejecting the input.
    ///
    /// All key errors are input-validation failures: a subscription with
    /// bad key material should be rejected, not retried. `MissingKey` is
    /// the exception - it indicates a caller bug, not bad input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::MissingKey { .. })
    }
}
