//! Error types for credential operations.

use crate::SigningAlg;
use joykit_encoding::{EncodingError, SignatureFormatError};
use thiserror::Error;

/// Errors when constructing a [`PasskeyPublicKey`].
///
/// [`PasskeyPublicKey`]: crate::PasskeyPublicKey
#[derive(Debug, Error)]
pub enum KeyError {
    /// The hex form of the key could not be decoded.
    #[error("failed to decode public key hex: {0}")]
    Encoding(#[from] EncodingError),

    /// The key bytes have an unrecognized length.
    #[error("public key must be 33, 64, or 65 bytes, got {0}")]
    InvalidLength(usize),

    /// The bytes are not a valid P-256 curve point.
    #[error("bytes are not a valid P-256 point")]
    InvalidPoint,
}

/// Errors from assertion verification.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Only ES256 assertions can be verified locally.
    #[error("cannot verify {0} assertions, only ES256")]
    UnsupportedAlgorithm(SigningAlg),

    /// The `clientDataJSON` could not be parsed, or its challenge could not
    /// be decoded.
    #[error("invalid clientDataJSON: {0}")]
    InvalidClientData(String),

    /// The challenge in `clientDataJSON` is not the message the caller
    /// asked to have signed.
    #[error("challenge mismatch")]
    ChallengeMismatch,

    /// The DER signature does not have the expected P-256 shape.
    #[error("malformed DER signature: {0}")]
    SignatureFormat(#[from] SignatureFormatError),

    /// The reformatted signature is not a valid ECDSA signature.
    #[error("invalid ECDSA signature: {0}")]
    InvalidSignature(String),

    /// The signature does not verify against the public key.
    #[error("signature does not verify against the public key")]
    SignatureMismatch,
}
