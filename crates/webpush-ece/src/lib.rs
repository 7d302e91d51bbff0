//! Encrypted content encoding for Web Push (draft `aesgcm`)
//!
//! Turns a push-notification payload into one AEAD-sealed record plus
//! the two HTTP header values (`Encryption`, `Crypto-Key`) the push
//! service needs to decrypt it, per the early `aesgcm` draft of HTTP
//! Message Encryption for Web Push.
//!
//! # Pipeline
//!
//! ```text
//! Subscriber public key + auth secret
//!        │
//!        ▼ ECDH (webpush-dh, fresh ephemeral sender pair)
//! Shared secret
//!        │
//!        ▼ HKDF-SHA256 (auth stage, then cek/nonce, bound to DH context)
//! 16-byte content-encryption key + 12-byte nonce
//!        │
//!        ▼ AES-128-GCM (padding-length prefix, empty AAD)
//! Ciphertext ── headers ──► Encryption / Crypto-Key values
//! ```
//!
//! The caller attaches the ciphertext and headers to its own outbound
//! request; nothing here touches the network. Everything operates on
//! raw bytes except the header field values, which are base64url
//! strings by upstream convention.
//!
//! # Security
//!
//! - One record per message; there is no record sequencing. A payload
//!   that needs more than one record does not belong in a push message.
//! - Each [`seal`] call uses a fresh ephemeral pair and a fresh random
//!   salt, so a (key, nonce) pair is never reused across plaintexts.
//! - Randomness is injected so tests can reproduce published vectors.
//! - Derived key material is zeroized on drop.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod context;
pub mod derivation;
pub mod error;
pub mod headers;
pub mod record;
pub mod seal;

pub use context::build_dh_context;
pub use derivation::{CEK_LEN, EncryptionKeys, NONCE_LEN, SALT_LEN, derive_encryption_keys, generate_salt};
pub use error::EceError;
pub use headers::{CryptoKeyHeader, EncryptionHeader};
pub use record::{MAX_PADDING, TAG_LEN, decrypt_record, encrypt_record};
pub use seal::{DraftCompat, SealedMessage, seal};
