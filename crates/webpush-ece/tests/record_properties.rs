//! Property-based tests for derivation and record sealing.
//!
//! Invariants:
//!
//! 1. Round-trip: opening a sealed record recovers the plaintext for
//!    any padding in range
//! 2. Determinism: identical derivation inputs yield identical keys
//! 3. Shape: sealed length is padding field + padding + plaintext + tag

use proptest::prelude::*;
use webpush_ece::{MAX_PADDING, TAG_LEN, decrypt_record, derive_encryption_keys, encrypt_record};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_seal_open_roundtrip(
        plaintext in prop::collection::vec(any::<u8>(), 0..1000),
        padding in 0..=MAX_PADDING,
        secret in prop::array::uniform32(any::<u8>()),
        salt in prop::array::uniform16(any::<u8>()),
    ) {
        let keys = derive_encryption_keys(&secret, salt, &[], b"test-context");

        let sealed = encrypt_record(&plaintext, &keys, padding).unwrap();
        let opened = decrypt_record(&sealed, &keys).unwrap();

        prop_assert_eq!(opened, plaintext);
    }

    #[test]
    fn prop_sealed_length(
        plaintext in prop::collection::vec(any::<u8>(), 0..1000),
        padding in 0..=MAX_PADDING,
        secret in prop::array::uniform32(any::<u8>()),
        salt in prop::array::uniform16(any::<u8>()),
    ) {
        let keys = derive_encryption_keys(&secret, salt, &[], &[]);

        let sealed = encrypt_record(&plaintext, &keys, padding).unwrap();
        prop_assert_eq!(sealed.len(), 2 + padding + plaintext.len() + TAG_LEN);
    }

    #[test]
    fn prop_derivation_deterministic(
        secret in prop::array::uniform32(any::<u8>()),
        salt in prop::array::uniform16(any::<u8>()),
        auth in prop::collection::vec(any::<u8>(), 0..=16),
        context in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let a = derive_encryption_keys(&secret, salt, &auth, &context);
        let b = derive_encryption_keys(&secret, salt, &auth, &context);

        prop_assert_eq!(a.cek(), b.cek());
        prop_assert_eq!(a.nonce(), b.nonce());
    }

    #[test]
    fn prop_different_salts_differ(
        secret in prop::array::uniform32(any::<u8>()),
        salt_a in prop::array::uniform16(any::<u8>()),
        salt_b in prop::array::uniform16(any::<u8>()),
    ) {
        prop_assume!(salt_a != salt_b);

        let a = derive_encryption_keys(&secret, salt_a, &[], &[]);
        let b = derive_encryption_keys(&secret, salt_b, &[], &[]);

        prop_assert_ne!(a.cek(), b.cek());
        prop_assert_ne!(a.nonce(), b.nonce());
    }

    #[test]
    fn prop_tampering_is_detected(
        plaintext in prop::collection::vec(any::<u8>(), 1..200),
        secret in prop::array::uniform32(any::<u8>()),
        salt in prop::array::uniform16(any::<u8>()),
        flip_bit in 0usize..8,
    ) {
        let keys = derive_encryption_keys(&secret, salt, &[], b"ctx");

        let mut sealed = encrypt_record(&plaintext, &keys, 0).unwrap();
        let last = sealed.len() - 1;
        sealed[last] ^= 1 << flip_bit;

        prop_assert!(decrypt_record(&sealed, &keys).is_err());
    }
}
