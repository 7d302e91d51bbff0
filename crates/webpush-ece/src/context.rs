//! DH context construction for HKDF info binding

/// Curve label that prefixes every DH context
const CONTEXT_LABEL: &[u8] = b"P-256";

/// Build the HKDF context binding both parties' public keys.
///
/// Layout:
///
/// ```text
/// "P-256" || 0x00 || u16be(len(receiver)) || receiver || u16be(len(sender)) || sender
/// ```
///
/// where `receiver` is the subscriber's public key and `sender` the
/// ephemeral key generated for this message. Binding both keys into the
/// derivation prevents key reuse across DH pairs.
///
/// Callers supporting the one known push-service build that ignores
/// context may pass an empty byte string downstream instead of the
/// result; that escape hatch lives with the caller, never here.
pub fn build_dh_context(receiver_public: &[u8], sender_public: &[u8]) -> Vec<u8> {
    let mut context = Vec::with_capacity(
        CONTEXT_LABEL.len() + 1 + 2 + receiver_public.len() + 2 + sender_public.len(),
    );

    context.extend_from_slice(CONTEXT_LABEL);
    context.push(0x00);
    context.extend_from_slice(&(receiver_public.len() as u16).to_be_bytes());
    context.extend_from_slice(receiver_public);
    context.extend_from_slice(&(sender_public.len() as u16).to_be_bytes());
    context.extend_from_slice(sender_public);
    context
}
