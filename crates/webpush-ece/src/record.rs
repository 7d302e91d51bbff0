//! AEAD record sealing with a padding-length prefix
//!
//! One record per message. The record is the plaintext prefixed with a
//! two-byte big-endian padding-length field and that many zero bytes;
//! the decrypting party skips the padding by length. Sealed with
//! AES-128-GCM and empty AAD.

use aes_gcm::{
    Aes128Gcm, Nonce,
    aead::{Aead, KeyInit},
};

use crate::{derivation::EncryptionKeys, error::EceError};

/// Largest padding length the draft allows for one record
pub const MAX_PADDING: usize = 255;

/// Length of the padding-length field that prefixes the record
const PADDING_FIELD_LEN: usize = 2;

/// Length of the GCM authentication tag appended to the ciphertext
pub const TAG_LEN: usize = 16;

/// Seal one record.
///
/// Builds `u16be(padding_length) || zeros(padding_length) || plaintext`
/// and seals it under `keys`, returning `ciphertext || 16-byte tag`.
/// Padding hides the plaintext length from the push service.
///
/// # Errors
///
/// - `InvalidPadding`: `padding_length` exceeds 255 (negative lengths
///   are unrepresentable in `usize`)
pub fn encrypt_record(
    plaintext: &[u8],
    keys: &EncryptionKeys,
    padding_length: usize,
) -> Result<Vec<u8>, EceError> {
    if padding_length > MAX_PADDING {
        return Err(EceError::InvalidPadding { requested: padding_length });
    }

    let mut record = Vec::with_capacity(PADDING_FIELD_LEN + padding_length + plaintext.len());
    record.extend_from_slice(&(padding_length as u16).to_be_bytes());
    record.resize(PADDING_FIELD_LEN + padding_length, 0x00);
    record.extend_from_slice(plaintext);

    let cipher = Aes128Gcm::new(keys.cek().into());
    #[allow(deprecated)]
    let Ok(sealed) = cipher.encrypt(Nonce::from_slice(keys.nonce()), record.as_slice()) else {
        unreachable!("AES-128-GCM encryption cannot fail with fixed-size key and nonce");
    };

    Ok(sealed)
}

/// Open one sealed record and strip the padding prefix.
///
/// The inverse of [`encrypt_record`]: authenticates and decrypts the
/// record, then drops the leading two-byte padding-length field and
/// that many padding bytes.
///
/// # Errors
///
/// - `DecryptionFailed`: authentication tag mismatch (tamper or wrong
///   keys)
/// - `MalformedRecord`: the record is shorter than the padding field or
///   claims more padding than it holds
pub fn decrypt_record(sealed: &[u8], keys: &EncryptionKeys) -> Result<Vec<u8>, EceError> {
    let cipher = Aes128Gcm::new(keys.cek().into());
    #[allow(deprecated)]
    let record = cipher
        .decrypt(Nonce::from_slice(keys.nonce()), sealed)
        .map_err(|_| EceError::DecryptionFailed)?;

    if record.len() < PADDING_FIELD_LEN {
        return Err(EceError::MalformedRecord { reason: "record shorter than the padding field" });
    }
    let (prefix, rest) = record.split_at(PADDING_FIELD_LEN);

    let padding_length = usize::from(u16::from_be_bytes([prefix[0], prefix[1]]));
    if padding_length > rest.len() {
        return Err(EceError::MalformedRecord { reason: "padding exceeds record length" });
    }

    Ok(rest[padding_length..].to_vec())
}
