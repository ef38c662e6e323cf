//! Bidirectional conversion between byte buffers and their hex, base64url,
//! and UTF-8 text encodings, plus secure random buffer generation.

use crate::EncodingError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

/// Default length, in bytes, of generated random buffers.
pub const DEFAULT_RANDOM_LENGTH: usize = 32;

/// Render a byte buffer as lowercase hex, two digits per byte.
///
/// An empty buffer renders as the empty string.
pub fn buffer_to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode a hex string into a byte buffer.
///
/// # Errors
///
/// Rejects odd-length input and non-hex digits.
pub fn hex_to_buffer(input: &str) -> Result<Vec<u8>, EncodingError> {
    Ok(hex::decode(input)?)
}

/// Render a byte buffer as a base64url string: the URL-safe alphabet
/// (`-` and `_` in place of `+` and `/`) with padding stripped.
pub fn buffer_to_base64url(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a base64url string into a byte buffer.
///
/// # Errors
///
/// Rejects characters outside the URL-safe alphabet, padding characters,
/// and impossible lengths.
pub fn base64url_to_buffer(input: &str) -> Result<Vec<u8>, EncodingError> {
    Ok(URL_SAFE_NO_PAD.decode(input)?)
}

/// Decode a base64url string and re-render it as lowercase hex.
///
/// # Errors
///
/// Rejects input that is not well-formed base64url.
pub fn base64url_to_hex(input: &str) -> Result<String, EncodingError> {
    Ok(hex::encode(base64url_to_buffer(input)?))
}

/// Concatenate two byte buffers into a new one.
///
/// Neither input is mutated; the first buffer's bytes occupy the low offset
/// range and the second's immediately follow.
pub fn append_buffer(first: &[u8], second: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(first.len() + second.len());
    buffer.extend_from_slice(first);
    buffer.extend_from_slice(second);
    buffer
}

/// Encode text as UTF-8 bytes.
pub fn utf8_string_to_buffer(value: &str) -> Vec<u8> {
    value.as_bytes().to_vec()
}

/// Decode a UTF-8 byte buffer into text.
///
/// # Errors
///
/// Malformed UTF-8 is rejected with a descriptive error; no replacement
/// characters are ever substituted.
pub fn buffer_to_utf8_string(bytes: &[u8]) -> Result<String, EncodingError> {
    Ok(std::str::from_utf8(bytes)?.to_owned())
}

/// The SHA-256 digest of a byte buffer.
#[must_use]
pub fn sha256(bytes: impl AsRef<[u8]>) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

/// Fill a new buffer of the given length with cryptographically-secure
/// random bytes.
///
/// # Errors
///
/// Fails only if the platform's secure random source does.
pub fn generate_random_bytes(length: usize) -> Result<Vec<u8>, EncodingError> {
    let mut bytes = vec![0u8; length];
    getrandom::getrandom(&mut bytes)?;
    Ok(bytes)
}

/// Generate `length` random bytes and render them as base64url.
///
/// # Errors
///
/// Fails only if the platform's secure random source does.
pub fn generate_random_base64url(length: usize) -> Result<String, EncodingError> {
    Ok(buffer_to_base64url(generate_random_bytes(length)?))
}

/// Generate `length` random bytes and render them as lowercase hex.
///
/// # Errors
///
/// Fails only if the platform's secure random source does.
pub fn generate_random_hex(length: usize) -> Result<String, EncodingError> {
    Ok(buffer_to_hex(generate_random_bytes(length)?))
}

/// Remove a leading `0x`, if present.
pub fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x").unwrap_or(hex)
}

/// Add a leading `0x`, if not already present.
pub fn ensure_hex_prefix(hex: &str) -> String {
    if hex.starts_with("0x") {
        hex.to_owned()
    } else {
        format!("0x{hex}")
    }
}

/// Abbreviate a long identifier by keeping `take` characters from the front
/// and `tail` characters from the back, joined by `pad`.
///
/// Input short enough to show whole is returned unchanged.
pub fn truncate_middle(value: &str, take: usize, tail: usize, pad: &str) -> String {
    let length = value.chars().count();

    if take + tail >= length {
        return value.to_owned();
    }

    let head: String = value.chars().take(take).collect();
    let rear: String = value.chars().skip(length - tail).collect();

    format!("{head}{pad}{rear}")
}
