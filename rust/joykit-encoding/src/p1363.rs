//! Reformatting of ECDSA signatures from ASN.1 DER to IEEE P1363.
//!
//! Authenticators and platform signing APIs emit ECDSA signatures as a DER
//! SEQUENCE of two variable-length, sign-padded INTEGER fields. Verification
//! APIs operating on raw curve points want the fixed-width concatenation
//! `R || S` instead. The conversion is a pure byte-reformatting step; it
//! neither validates nor re-derives anything cryptographic.

use crate::SignatureFormatError;

/// Byte width of a P-256 curve coordinate.
const COORDINATE_WIDTH: usize = 32;

const SEQUENCE_TAG: u8 = 0x30;
const INTEGER_TAG: u8 = 0x02;

/// Convert a DER-encoded P-256 ECDSA signature into its 64-byte IEEE P1363
/// form: R and S, each normalized to exactly 32 bytes, concatenated.
///
/// Sign-padding zero bytes are dropped and short values are left-padded, so
/// the numeric values of R and S are preserved exactly. Input is slightly
/// more tolerant than strict DER: redundant leading zeros are accepted and
/// normalized away.
///
/// # Errors
///
/// The input must be a SEQUENCE containing exactly two INTEGER fields and
/// nothing else; anything structurally different is rejected. A field still
/// wider than 32 bytes after sign-padding removal means the signature is
/// from a wider curve (e.g. P-384) and is rejected as unsupported rather
/// than mis-padded.
///
/// # Example
///
/// ```
/// use joykit_encoding::der_to_p1363;
///
/// // SEQUENCE { INTEGER <32 bytes of 0x11>, INTEGER <32 bytes of 0x22> }
/// let mut der = vec![0x30, 0x44, 0x02, 0x20];
/// der.extend([0x11; 32]);
/// der.extend([0x02, 0x20]);
/// der.extend([0x22; 32]);
///
/// let p1363 = der_to_p1363(&der)?;
/// assert_eq!(&p1363[..32], &[0x11; 32][..]);
/// assert_eq!(&p1363[32..], &[0x22; 32][..]);
/// # Ok::<(), joykit_encoding::SignatureFormatError>(())
/// ```
pub fn der_to_p1363(der: &[u8]) -> Result<[u8; 2 * COORDINATE_WIDTH], SignatureFormatError> {
    let mut offset = 0usize;

    expect_tag(der, &mut offset, SEQUENCE_TAG)?;

    let declared = read_length(der, &mut offset)?;
    let remaining = der.len() - offset;

    if declared != remaining {
        return Err(SignatureFormatError::LengthMismatch {
            declared,
            remaining,
        });
    }

    let r = read_integer(der, &mut offset)?;
    let s = read_integer(der, &mut offset)?;

    if offset != der.len() {
        return Err(SignatureFormatError::TrailingBytes(der.len() - offset));
    }

    let mut p1363 = [0u8; 2 * COORDINATE_WIDTH];
    write_coordinate(r, &mut p1363[..COORDINATE_WIDTH])?;
    write_coordinate(s, &mut p1363[COORDINATE_WIDTH..])?;

    Ok(p1363)
}

fn expect_tag(bytes: &[u8], offset: &mut usize, expected: u8) -> Result<(), SignatureFormatError> {
    let found = *bytes.get(*offset).ok_or(SignatureFormatError::Truncated)?;

    if found != expected {
        return Err(SignatureFormatError::UnexpectedTag { expected, found });
    }

    *offset += 1;
    Ok(())
}

/// Read a short-form length byte. P-256 signature fields fit in 33 bytes,
/// so a long-form length can only mean foreign input.
fn read_length(bytes: &[u8], offset: &mut usize) -> Result<usize, SignatureFormatError> {
    let length = *bytes.get(*offset).ok_or(SignatureFormatError::Truncated)?;

    if length >= 0x80 {
        return Err(SignatureFormatError::LongFormLength);
    }

    *offset += 1;
    Ok(length as usize)
}

fn read_integer<'a>(
    bytes: &'a [u8],
    offset: &mut usize,
) -> Result<&'a [u8], SignatureFormatError> {
    expect_tag(bytes, offset, INTEGER_TAG)?;

    let length = read_length(bytes, offset)?;

    if length == 0 {
        return Err(SignatureFormatError::EmptyInteger);
    }

    let end = *offset + length;

    if end > bytes.len() {
        return Err(SignatureFormatError::Truncated);
    }

    let value = &bytes[*offset..end];
    *offset = end;

    Ok(value)
}

/// Normalize an integer field into a fixed-width coordinate slot: drop
/// leading zero bytes, then left-pad to the slot width.
fn write_coordinate(value: &[u8], out: &mut [u8]) -> Result<(), SignatureFormatError> {
    let significant = match value.iter().position(|byte| *byte != 0) {
        Some(start) => &value[start..],
        None => &[],
    };

    if significant.len() > out.len() {
        return Err(SignatureFormatError::UnsupportedWidth(significant.len()));
    }

    let padding = out.len() - significant.len();
    out[padding..].copy_from_slice(significant);

    Ok(())
}
