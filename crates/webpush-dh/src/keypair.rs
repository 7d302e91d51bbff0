//! P-256 key pairs for Web Push ECDH

use p256::{
    PublicKey, SecretKey,
    elliptic_curve::{
        rand_core::{CryptoRng, RngCore},
        sec1::ToEncodedPoint,
    },
};
use zeroize::Zeroize;

use crate::error::KeyError;

/// Length of an uncompressed SEC1 P-256 point (`0x04 || x || y`)
pub const PUBLIC_KEY_LEN: usize = 65;

/// Length of a P-256 private scalar
pub const PRIVATE_KEY_LEN: usize = 32;

/// An elliptic-curve key pair on P-256.
///
/// Starts empty and is populated once, either by [`generate`](Self::generate)
/// or by the explicit setters. A sender pair is used for exactly one
/// encryption operation; a subscriber pair usually holds only the public
/// half taken from the push subscription.
#[derive(Default, Clone)]
pub struct KeyPair {
    /// Uncompressed SEC1 point, validated on entry
    public_key: Option<[u8; PUBLIC_KEY_LEN]>,
    /// Big-endian private scalar
    private_key: Option<[u8; PRIVATE_KEY_LEN]>,
}

impl KeyPair {
    /// Empty pair with neither half set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh uniformly random pair.
    ///
    /// The caller MUST provide a cryptographically secure random source
    /// in production. The public half is the uncompressed encoding of the
    /// corresponding point, always 65 bytes with a leading `0x04`.
    pub fn generate(rng: &mut (impl CryptoRng + RngCore)) -> Self {
        let secret = SecretKey::random(rng);
        let point = secret.public_key().to_encoded_point(false);

        let mut public = [0u8; PUBLIC_KEY_LEN];
        public.copy_from_slice(point.as_bytes());

        let mut private = [0u8; PRIVATE_KEY_LEN];
        private.copy_from_slice(&secret.to_bytes());

        Self { public_key: Some(public), private_key: Some(private) }
    }

    /// Set the public half from raw bytes.
    ///
    /// Accepts exactly 65 bytes forming a valid uncompressed point on
    /// P-256. Anything else is rejected without touching prior state -
    /// no truncation, no padding.
    ///
    /// # Errors
    ///
    /// - `InvalidKeyLength`: not exactly 65 bytes
    /// - `InvalidCurvePoint`: 65 bytes that are not a point on the curve
    pub fn set_public_key(&mut self, bytes: &[u8]) -> Result<(), KeyError> {
        if bytes.len() != PUBLIC_KEY_LEN {
            return Err(KeyError::InvalidKeyLength {
                expected: PUBLIC_KEY_LEN,
                actual: bytes.len(),
            });
        }
        if PublicKey::from_sec1_bytes(bytes).is_err() {
            return Err(KeyError::InvalidCurvePoint);
        }

        let mut public = [0u8; PUBLIC_KEY_LEN];
        public.copy_from_slice(bytes);
        self.public_key = Some(public);
        Ok(())
    }

    /// Set the private half from raw bytes.
    ///
    /// Only the length is checked here; scalar range is enforced when the
    /// key is used in [`calculate_secret`](crate::calculate_secret).
    ///
    /// # Errors
    ///
    /// - `InvalidKeyLength`: not exactly 32 bytes
    pub fn set_private_key(&mut self, bytes: &[u8]) -> Result<(), KeyError> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(KeyError::InvalidKeyLength {
                expected: PRIVATE_KEY_LEN,
                actual: bytes.len(),
            });
        }

        let mut private = [0u8; PRIVATE_KEY_LEN];
        private.copy_from_slice(bytes);
        self.private_key = Some(private);
        Ok(())
    }

    /// Public half, if set.
    pub fn public_key(&self) -> Option<&[u8; PUBLIC_KEY_LEN]> {
        self.public_key.as_ref()
    }

    /// Private half, if set.
    pub fn private_key(&self) -> Option<&[u8; PRIVATE_KEY_LEN]> {
        self.private_key.as_ref()
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        if let Some(private) = &mut self.private_key {
            private.zeroize();
        }
    }
}

// Never print the private scalar
impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key.map(|_| "[65 bytes]"))
            .field("private_key", &self.private_key.map(|_| "[REDACTED]"))
            .finish()
    }
}
