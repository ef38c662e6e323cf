#![warn(missing_docs)]

//! Conversions between byte buffers and the text encodings used at the
//! passkey wallet boundary, plus reformatting of ECDSA signatures from the
//! ASN.1 DER form emitted by authenticators into the fixed-width IEEE P1363
//! form consumed by raw-coordinate verification APIs.
//!
//! Everything in this crate is a pure, synchronous transformation; the only
//! side effect anywhere is [`generate_random_bytes`] consulting the
//! platform's secure random source. Malformed input is always rejected with
//! a descriptive error rather than silently producing corrupted output.

mod error;
pub use error::*;

mod codec;
pub use codec::*;

mod p1363;
pub use p1363::*;
