//! Two-stage HKDF-SHA256 key derivation
//!
//! Turns the ECDH shared secret into the content-encryption key and
//! nonce. When the subscription carries a pre-shared auth secret, an
//! extra HKDF pass keyed on it runs first and its output - not the raw
//! ECDH secret - feeds both expansions.

use hkdf::Hkdf;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::error::EceError;

/// Length of the per-message random salt
pub const SALT_LEN: usize = 16;

/// Length of the AES-128-GCM content-encryption key
pub const CEK_LEN: usize = 16;

/// Length of the AES-GCM nonce
pub const NONCE_LEN: usize = 12;

/// Info string for the auth-secret pre-keying stage
const AUTH_INFO: &[u8] = b"Content-Encoding: auth\0";

/// Info prefix for the content-encryption-key expansion
const CEK_INFO: &[u8] = b"Content-Encoding: aesgcm\0";

/// Info prefix for the nonce expansion
const NONCE_INFO: &[u8] = b"Content-Encoding: nonce\0";

/// Derived key material for one record.
///
/// Immutable once constructed and tied to exactly one
/// (secret, salt, auth-secret, context) quadruple. Sealing a different
/// plaintext requires a fresh derivation with a fresh salt; reusing the
/// nonce under the same key breaks the AEAD.
#[derive(Clone)]
pub struct EncryptionKeys {
    salt: [u8; SALT_LEN],
    cek: [u8; CEK_LEN],
    nonce: [u8; NONCE_LEN],
}

impl EncryptionKeys {
    /// Assemble keys from raw parts, for callers holding key material
    /// derived elsewhere (interop tests, stored vectors).
    ///
    /// # Errors
    ///
    /// - `CipherInit`: any part has the wrong length
    pub fn from_raw(salt: &[u8], cek: &[u8], nonce: &[u8]) -> Result<Self, EceError> {
        let salt: [u8; SALT_LEN] = salt.try_into().map_err(|_| EceError::CipherInit {
            field: "salt",
            expected: SALT_LEN,
            actual: salt.len(),
        })?;
        let cek: [u8; CEK_LEN] = cek.try_into().map_err(|_| EceError::CipherInit {
            field: "cek",
            expected: CEK_LEN,
            actual: cek.len(),
        })?;
        let nonce: [u8; NONCE_LEN] = nonce.try_into().map_err(|_| EceError::CipherInit {
            field: "nonce",
            expected: NONCE_LEN,
            actual: nonce.len(),
        })?;

        Ok(Self { salt, cek, nonce })
    }

    /// Per-message salt the keys were derived under.
    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    /// 16-byte AES-128-GCM content-encryption key.
    pub fn cek(&self) -> &[u8; CEK_LEN] {
        &self.cek
    }

    /// 12-byte AES-GCM nonce.
    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }
}

impl Drop for EncryptionKeys {
    fn drop(&mut self) {
        self.cek.zeroize();
        self.nonce.zeroize();
    }
}

// The salt is public (it travels in the Encryption header); the rest is not
impl std::fmt::Debug for EncryptionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionKeys")
            .field("salt", &self.salt)
            .field("cek", &"[REDACTED]")
            .field("nonce", &"[REDACTED]")
            .finish()
    }
}

/// Generate a fresh random salt for one message.
///
/// The caller MUST provide a cryptographically secure random source in
/// production; tests substitute a fixed source to reproduce vectors.
pub fn generate_salt(rng: &mut (impl CryptoRng + RngCore)) -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);
    salt
}

/// Derive the content-encryption key and nonce for one record.
///
/// 1. If `auth_secret` is non-empty, pre-key: `ikm = HKDF(salt =
///    auth_secret, ikm = secret, info = "Content-Encoding: auth" || 0x00,
///    32)`. An empty `auth_secret` skips this stage and the raw secret
///    is the ikm.
/// 2. `cek = HKDF(salt, ikm, "Content-Encoding: aesgcm" || 0x00 || context, 16)`
/// 3. `nonce = HKDF(salt, ikm, "Content-Encoding: nonce" || 0x00 || context, 12)`
///
/// `context` is normally the output of
/// [`build_dh_context`](crate::build_dh_context); an empty context is
/// the documented interoperability escape hatch for a push-service
/// build that ignores it. Deterministic in all four inputs.
pub fn derive_encryption_keys(
    secret: &[u8],
    salt: [u8; SALT_LEN],
    auth_secret: &[u8],
    context: &[u8],
) -> EncryptionKeys {
    let mut prekeyed = [0u8; 32];
    let ikm: &[u8] = if auth_secret.is_empty() {
        secret
    } else {
        let auth_stage = Hkdf::<Sha256>::new(Some(auth_secret), secret);
        let Ok(()) = auth_stage.expand(AUTH_INFO, &mut prekeyed) else {
            unreachable!("32 bytes is a valid HKDF-SHA256 output length");
        };
        &prekeyed
    };

    let hk = Hkdf::<Sha256>::new(Some(&salt), ikm);

    let mut info = Vec::with_capacity(CEK_INFO.len() + context.len());
    info.extend_from_slice(CEK_INFO);
    info.extend_from_slice(context);
    let mut cek = [0u8; CEK_LEN];
    let Ok(()) = hk.expand(&info, &mut cek) else {
        unreachable!("16 bytes is a valid HKDF-SHA256 output length");
    };

    info.clear();
    info.extend_from_slice(NONCE_INFO);
    info.extend_from_slice(context);
    let mut nonce = [0u8; NONCE_LEN];
    let Ok(()) = hk.expand(&info, &mut nonce) else {
        unreachable!("12 bytes is a valid HKDF-SHA256 output length");
    };

    prekeyed.zeroize();
    EncryptionKeys { salt, cek, nonce }
}
