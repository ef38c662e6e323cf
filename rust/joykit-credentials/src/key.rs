//! The P-256 public key material behind a passkey credential.

use crate::KeyError;
use joykit_encoding::{hex_to_buffer, strip_hex_prefix};

/// A passkey credential's P-256 public key.
///
/// Wallets report the key in a few shapes: SEC1 points (33-byte compressed
/// or 65-byte uncompressed) and the bare 64-byte `x || y` coordinate form,
/// usually as hex. All of them construct the same verifying key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasskeyPublicKey {
    key: p256::ecdsa::VerifyingKey,
}

impl PasskeyPublicKey {
    /// Construct from SEC1-encoded point bytes (33 bytes compressed or
    /// 65 bytes uncompressed).
    ///
    /// # Errors
    ///
    /// Rejects bytes that are not a valid P-256 point.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let key =
            p256::ecdsa::VerifyingKey::from_sec1_bytes(bytes).map_err(|_| KeyError::InvalidPoint)?;

        Ok(Self { key })
    }

    /// Construct from the bare 64-byte `x || y` coordinate form, with no
    /// SEC1 prefix byte.
    ///
    /// # Errors
    ///
    /// Rejects input that is not exactly 64 bytes or not a valid point.
    pub fn from_raw_coordinates(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != 64 {
            return Err(KeyError::InvalidLength(bytes.len()));
        }

        let mut sec1 = Vec::with_capacity(65);
        sec1.push(0x04);
        sec1.extend_from_slice(bytes);

        Self::from_sec1_bytes(&sec1)
    }

    /// Construct from hex, accepting any of the byte shapes above and an
    /// optional `0x` prefix.
    ///
    /// # Errors
    ///
    /// Rejects malformed hex, unrecognized lengths, and invalid points.
    pub fn from_hex(value: &str) -> Result<Self, KeyError> {
        let bytes = hex_to_buffer(strip_hex_prefix(value))?;

        match bytes.len() {
            64 => Self::from_raw_coordinates(&bytes),
            33 | 65 => Self::from_sec1_bytes(&bytes),
            other => Err(KeyError::InvalidLength(other)),
        }
    }

    /// The compressed SEC1 form of the key (33 bytes).
    #[must_use]
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.key.to_encoded_point(true).as_bytes().to_vec()
    }

    /// The underlying verifying key.
    pub const fn verifying_key(&self) -> &p256::ecdsa::VerifyingKey {
        &self.key
    }
}

impl From<p256::ecdsa::VerifyingKey> for PasskeyPublicKey {
    fn from(key: p256::ecdsa::VerifyingKey) -> Self {
        Self { key }
    }
}
