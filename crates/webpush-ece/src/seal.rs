//! End-to-end seal pipeline
//!
//! The full control flow for one message: ephemeral pair, ECDH, DH
//! context, key derivation under a fresh salt, record sealing, and
//! header rendering. The caller attaches the result to its own outbound
//! request and adds `Content-Encoding: aesgcm`, `TTL`, and any
//! authorization the destination needs.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{CryptoRng, RngCore};
use webpush_dh::{KeyPair, PUBLIC_KEY_LEN, calculate_secret};

use crate::{
    context::build_dh_context,
    derivation::{derive_encryption_keys, generate_salt},
    error::EceError,
    headers::{CryptoKeyHeader, EncryptionHeader},
    record::encrypt_record,
};

/// Which rendition of the draft the destination speaks.
///
/// The deviation is a property of the destination, decided by the
/// transport layer (typically by looking at the endpoint); the core
/// only receives the decision and never sniffs URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftCompat {
    /// Derivation bound to the DH context and pre-keyed with the auth
    /// secret
    #[default]
    Standard,
    /// Escape hatch for the known push-service build that ignores both
    /// the context and the auth secret when decrypting
    LegacyNoContext,
}

/// Everything the transport layer needs to send one encrypted push.
///
/// Returned fully constructed or not at all; a failed seal never leaks
/// partial ciphertext or headers.
#[derive(Debug, Clone)]
pub struct SealedMessage {
    /// Sealed record: ciphertext plus the 16-byte authentication tag
    pub ciphertext: Vec<u8>,
    /// `Encryption` header with the base64url salt and record size set
    pub encryption: EncryptionHeader,
    /// `Crypto-Key` header with the base64url ephemeral public key set
    pub crypto_key: CryptoKeyHeader,
    /// The ephemeral sender public key, raw
    pub sender_public: [u8; PUBLIC_KEY_LEN],
}

/// Encrypt one payload for a push subscription.
///
/// `subscriber_public` is the subscription's raw 65-byte P-256 key;
/// `auth_secret` its pre-shared auth secret (empty if the subscription
/// has none). A fresh ephemeral pair and salt are drawn from `rng` on
/// every call, so no key or nonce is ever reused across messages.
///
/// # Errors
///
/// - `Key`: the subscriber key is not a valid uncompressed P-256 point
/// - `InvalidPadding`: `padding_length` exceeds 255
pub fn seal(
    plaintext: &[u8],
    subscriber_public: &[u8],
    auth_secret: &[u8],
    padding_length: usize,
    compat: DraftCompat,
    rng: &mut (impl CryptoRng + RngCore),
) -> Result<SealedMessage, EceError> {
    let mut subscription = KeyPair::new();
    subscription.set_public_key(subscriber_public)?;

    let sender = KeyPair::generate(rng);
    let secret = calculate_secret(&sender, &subscription)?;

    let Some(receiver_public) = subscription.public_key() else {
        unreachable!("set_public_key succeeded above");
    };
    let Some(sender_public) = sender.public_key() else {
        unreachable!("generated pairs always carry a public key");
    };

    let dh_context = build_dh_context(receiver_public, sender_public);
    let (context, auth): (&[u8], &[u8]) = match compat {
        DraftCompat::Standard => (&dh_context, auth_secret),
        DraftCompat::LegacyNoContext => (&[], &[]),
    };

    let salt = generate_salt(rng);
    let keys = derive_encryption_keys(secret.as_bytes(), salt, auth, context);
    let ciphertext = encrypt_record(plaintext, &keys, padding_length)?;

    tracing::debug!(
        payload_len = plaintext.len(),
        padding = padding_length,
        compat = ?compat,
        "sealed push payload"
    );

    let encryption = EncryptionHeader {
        keyid: String::new(),
        record_size: ciphertext.len(),
        salt: URL_SAFE_NO_PAD.encode(keys.salt()),
    };
    let crypto_key = CryptoKeyHeader {
        keyid: String::new(),
        dh: URL_SAFE_NO_PAD.encode(sender_public),
        aesgcm: String::new(),
    };

    Ok(SealedMessage { ciphertext, encryption, crypto_key, sender_public: *sender_public })
}
