//! P-256 key agreement for Web Push payload encryption
//!
//! Key-pair handling and ECDH shared-secret computation on NIST P-256,
//! as required by the `aesgcm` draft of HTTP Message Encryption for Web
//! Push. The subscriber's public key comes from the push subscription;
//! the sender generates a fresh ephemeral pair per message.
//!
//! ```text
//! Subscriber public key (65 bytes, SEC1 uncompressed)
//!        │
//!        ▼
//! Ephemeral sender pair ── ECDH ──► Shared secret (x-coordinate, 32 bytes)
//!        │                                 │
//!        ▼                                 ▼
//! Crypto-Key header (dh)          HKDF input keying material
//! ```
//!
//! # Security
//!
//! - One sender pair per message. Never reuse an ephemeral pair across
//!   messages; forward secrecy depends on it.
//! - Randomness is injected: [`KeyPair::generate`] takes the caller's
//!   CSPRNG so tests can substitute a deterministic source.
//! - Private scalars and shared secrets are zeroized on drop.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod agreement;
pub mod error;
pub mod keypair;

pub use agreement::{SharedSecret, calculate_secret};
pub use error::KeyError;
pub use keypair::{KeyPair, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN};
