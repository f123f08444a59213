//! Internet Computer identity derivation from a raw ed25519 secret key.

use candid::Principal;
use ed25519_dalek::SigningKey;

use crate::artifacts::decode_hex;
use crate::error::OpFailure;

/// RFC 8410 SubjectPublicKeyInfo prefix for an ed25519 public key.
const ED25519_SPKI_PREFIX: [u8; 12] = [
    0x30, 0x2a, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x03, 0x21, 0x00,
];

/// An identity derived from a raw ed25519 secret key. Derivation is a pure
/// function of the key: the same key always yields the same principal.
#[derive(Debug)]
pub struct DerivedIdentity {
    principal: Principal,
}

impl DerivedIdentity {
    pub fn from_secret_key(secret: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(secret);
        let public_key = signing_key.verifying_key();
        let mut der = Vec::with_capacity(ED25519_SPKI_PREFIX.len() + 32);
        der.extend_from_slice(&ED25519_SPKI_PREFIX);
        der.extend_from_slice(public_key.as_bytes());
        Self {
            principal: Principal::self_authenticating(der),
        }
    }

    pub fn from_secret_key_hex(secret_hex: &str) -> Result<Self, OpFailure> {
        let bytes = decode_hex(secret_hex)?;
        let secret: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
            OpFailure::new(
                "parse secret key",
                format!("expected 32 bytes, got {}", bytes.len()),
            )
        })?;
        Ok(Self::from_secret_key(&secret))
    }

    pub fn principal(&self) -> Principal {
        self.principal
    }

    /// Textual form, the display string the scripts report.
    pub fn principal_text(&self) -> String {
        self.principal.to_text()
    }
}
