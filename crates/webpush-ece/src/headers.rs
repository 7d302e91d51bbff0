//! Serialization of the `Encryption` and `Crypto-Key` headers
//!
//! Pure formatting: non-empty fields in fixed order, `;`-joined, no
//! trailing separator. Field values are strings the caller has already
//! encoded (base64url without padding by upstream convention); nothing
//! here inspects or re-encodes them.

/// The `Encryption` header: key id, record size, and salt.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EncryptionHeader {
    /// Identifies the keying material; may be empty
    pub keyid: String,
    /// Record size; 0 means the field is omitted
    pub record_size: usize,
    /// base64url-encoded per-message salt; required for a well-formed
    /// header, but representable empty
    pub salt: String,
}

impl EncryptionHeader {
    /// Canonical header value: `keyid=..;rs=..;salt=..` with empty/zero
    /// fields omitted.
    pub fn serialize(&self) -> String {
        let mut fields = Vec::with_capacity(3);
        if !self.keyid.is_empty() {
            fields.push(format!("keyid={}", self.keyid));
        }
        if self.record_size != 0 {
            fields.push(format!("rs={}", self.record_size));
        }
        if !self.salt.is_empty() {
            fields.push(format!("salt={}", self.salt));
        }
        fields.join(";")
    }
}

/// The `Crypto-Key` header: key id, DH public key, and the legacy
/// `aesgcm` key id used by the dual-compatibility mode.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CryptoKeyHeader {
    /// Identifies the keying material; may be empty
    pub keyid: String,
    /// base64url-encoded ephemeral sender public key
    pub dh: String,
    /// Legacy key id for endpoints speaking the older draft; may be
    /// empty
    pub aesgcm: String,
}

impl CryptoKeyHeader {
    /// Canonical header value: `keyid=..;dh=..;aesgcm=..` with empty
    /// fields omitted. All fields empty yields an empty string.
    pub fn serialize(&self) -> String {
        let mut fields = Vec::with_capacity(3);
        if !self.keyid.is_empty() {
            fields.push(format!("keyid={}", self.keyid));
        }
        if !self.dh.is_empty() {
            fields.push(format!("dh={}", self.dh));
        }
        if !self.aesgcm.is_empty() {
            fields.push(format!("aesgcm={}", self.aesgcm));
        }
        fields.join(";")
    }
}
