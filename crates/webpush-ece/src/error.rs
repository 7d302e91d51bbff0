//! Error types for encrypted content encoding

use thiserror::Error;

/// Errors from context building, derivation, and record sealing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EceError {
    /// Requested padding length exceeds the draft's 255-byte cap
    #[error("invalid padding length {requested}: must be at most 255")]
    InvalidPadding {
        /// The padding length that was requested
        requested: usize,
    },

    /// Key material with the wrong length reached the cipher.
    ///
    /// Unreachable through [`derive_encryption_keys`](crate::derive_encryption_keys),
    /// which produces fixed sizes; surfaces only from
    /// [`EncryptionKeys::from_raw`](crate::EncryptionKeys::from_raw).
    #[error("cipher init failed: {field} must be {expected} bytes, got {actual}")]
    CipherInit {
        /// Which piece of key material was malformed
        field: &'static str,
        /// Required length
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// AEAD open failed (authentication tag mismatch or wrong key)
    #[error("decryption failed: authentication tag mismatch")]
    DecryptionFailed,

    /// Decrypted record does not follow the padding-prefix layout
    #[error("malformed record: {reason}")]
    MalformedRecord {
        /// What was wrong with the record
        reason: &'static str,
    },

    /// Key handling or agreement failure from the DH layer
    #[error(transparent)]
    Key(#[from] webpush_dh::KeyError),
}

impl EceError {
    /// Returns true if the caller can recover by rejecting the input.
    ///
    /// `InvalidPadding` is a caller bug; `CipherInit` indicates broken
    /// key material handed in from outside the derivation path. Both are
    /// fixed by correcting the call, not by retrying.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::DecryptionFailed | Self::MalformedRecord { .. } => true,
            Self::Key(err) => err.is_recoverable(),
            Self::InvalidPadding { .. } | Self::CipherInit { .. } => false,
        }
    }
}
