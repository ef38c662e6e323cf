use thiserror::Error;

/// Errors that can occur while converting between byte buffers and their
/// text encodings.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// The input was not a well-formed hexadecimal string (odd length or a
    /// non-hex digit).
    #[error("failed to decode a hexadecimal string: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// The input was not a well-formed base64url string.
    #[error("failed to decode a base64url string: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// The buffer does not contain valid UTF-8.
    #[error("buffer is not valid UTF-8: {0}")]
    Utf8Decode(#[from] std::str::Utf8Error),

    /// The platform's secure random source failed.
    #[error("secure random source failed: {0}")]
    Random(#[from] getrandom::Error),
}

/// Errors raised by [`der_to_p1363`] when a signature does not have the
/// expected ASN.1 DER shape for a P-256 ECDSA signature.
///
/// [`der_to_p1363`]: crate::der_to_p1363
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureFormatError {
    /// The signature ended before the expected structure was complete.
    #[error("signature is truncated")]
    Truncated,

    /// A structure tag other than the expected one was encountered.
    #[error("expected tag {expected:#04x}, found {found:#04x}")]
    UnexpectedTag {
        /// The tag required at this position.
        expected: u8,
        /// The tag actually present.
        found: u8,
    },

    /// A length byte used the long form, which P-256 signatures never need.
    #[error("long-form DER length encountered; P-256 signatures use short-form lengths only")]
    LongFormLength,

    /// The declared SEQUENCE length disagrees with the buffer length.
    #[error("declared length {declared} does not match the {remaining} remaining bytes")]
    LengthMismatch {
        /// The length declared by the SEQUENCE header.
        declared: usize,
        /// The bytes actually remaining after the header.
        remaining: usize,
    },

    /// An INTEGER field declared a length of zero.
    #[error("integer field is empty")]
    EmptyInteger,

    /// An integer value wider than 32 bytes after sign-padding removal; the
    /// signature is from an unsupported (non P-256) curve.
    #[error("integer field is {0} bytes wide; only 32-byte (P-256) coordinates are supported")]
    UnsupportedWidth(usize),

    /// Data remained after the second INTEGER field.
    #[error("{0} unexpected trailing bytes after the second integer field")]
    TrailingBytes(usize),
}
