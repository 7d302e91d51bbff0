//! ECDH shared-secret computation on P-256

use p256::{PublicKey, SecretKey, ecdh};
use zeroize::Zeroize;

use crate::{error::KeyError, keypair::KeyPair};

/// Length of the shared secret (the x-coordinate of a P-256 point)
pub const SHARED_SECRET_LEN: usize = 32;

/// The ECDH shared secret: input keying material for HKDF.
///
/// Consumed once by key derivation and then discardable; zeroized on
/// drop.
#[derive(Clone)]
pub struct SharedSecret([u8; SHARED_SECRET_LEN]);

impl SharedSecret {
    /// Big-endian x-coordinate bytes.
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedSecret").field(&"[REDACTED]").finish()
    }
}

/// Compute the ECDH shared secret between `local` and `peer`.
///
/// Scalar-multiplies `local`'s private scalar with `peer`'s public point
/// and returns the big-endian x-coordinate. Symmetric in the pairs:
/// `calculate_secret(a, b)` equals `calculate_secret(b, a)` when each
/// side holds the matching halves.
///
/// # Errors
///
/// - `MissingKey`: `local` has no private key or `peer` has no public
///   key (caller contract violation)
/// - `InvalidScalar`: the stored private bytes are zero or not below the
///   curve order (only length was checked at set time)
/// - `InvalidCurvePoint`: the stored public bytes fail curve validation
pub fn calculate_secret(local: &KeyPair, peer: &KeyPair) -> Result<SharedSecret, KeyError> {
    let private = local.private_key().ok_or(KeyError::MissingKey { which: "local private" })?;
    let public = peer.public_key().ok_or(KeyError::MissingKey { which: "peer public" })?;

    let scalar = SecretKey::from_slice(private).map_err(|_| KeyError::InvalidScalar)?;
    let point = PublicKey::from_sec1_bytes(public).map_err(|_| KeyError::InvalidCurvePoint)?;

    let shared = ecdh::diffie_hellman(scalar.to_nonzero_scalar(), point.as_affine());

    let mut secret = [0u8; SHARED_SECRET_LEN];
    secret.copy_from_slice(&shared.raw_secret_bytes()[..]);
    Ok(SharedSecret(secret))
}

#[cfg(test)]
mod tests {
    use rand::rngs::OsRng;

    use super::*;

    #[test]
    fn ecdh_is_symmetric() {
        let alice = KeyPair::generate(&mut OsRng);
        let bob = KeyPair::generate(&mut OsRng);

        let ab = calculate_secret(&alice, &bob).unwrap();
        let ba = calculate_secret(&bob, &alice).unwrap();

        assert_eq!(ab.as_bytes(), ba.as_bytes());
    }

    #[test]
    fn different_peers_produce_different_secrets() {
        let alice = KeyPair::generate(&mut OsRng);
        let bob = KeyPair::generate(&mut OsRng);
        let carol = KeyPair::generate(&mut OsRng);

        let ab = calculate_secret(&alice, &bob).unwrap();
        let ac = calculate_secret(&alice, &carol).unwrap();

        assert_ne!(ab.as_bytes(), ac.as_bytes());
    }

    #[test]
    fn secret_has_fixed_length() {
        let alice = KeyPair::generate(&mut OsRng);
        let bob = KeyPair::generate(&mut OsRng);

        let secret = calculate_secret(&alice, &bob).unwrap();
        assert_eq!(secret.as_bytes().len(), SHARED_SECRET_LEN);
    }

    #[test]
    fn missing_private_key_is_rejected() {
        let generated = KeyPair::generate(&mut OsRng);
        let mut public_only = KeyPair::new();
        public_only.set_public_key(generated.public_key().unwrap()).unwrap();

        let err = calculate_secret(&public_only, &generated).unwrap_err();
        assert_eq!(err, KeyError::MissingKey { which: "local private" });
    }

    #[test]
    fn missing_peer_public_key_is_rejected() {
        let local = KeyPair::generate(&mut OsRng);
        let empty = KeyPair::new();

        let err = calculate_secret(&local, &empty).unwrap_err();
        assert_eq!(err, KeyError::MissingKey { which: "peer public" });
    }

    #[test]
    fn zero_scalar_is_rejected_at_use_time() {
        let generated = KeyPair::generate(&mut OsRng);

        // Length check alone lets a zero scalar in; agreement must not.
        let mut local = KeyPair::new();
        local.set_private_key(&[0u8; 32]).unwrap();

        let err = calculate_secret(&local, &generated).unwrap_err();
        assert_eq!(err, KeyError::InvalidScalar);
    }

    #[test]
    fn debug_redacts_secret() {
        let alice = KeyPair::generate(&mut OsRng);
        let bob = KeyPair::generate(&mut OsRng);

        let secret = calculate_secret(&alice, &bob).unwrap();
        assert_eq!(format!("{secret:?}"), "SharedSecret(\"[REDACTED]\")");
    }
}
