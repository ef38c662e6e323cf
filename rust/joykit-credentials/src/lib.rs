//! Passkey credential types and assertion verification.
//!
//! When the wallet signs a message on the user's behalf, the application
//! gets back a WebAuthn assertion: the `clientDataJSON` and
//! `authenticatorData` the authenticator covered, plus a DER-encoded ECDSA
//! P-256 signature. This crate checks such an assertion against the
//! account's public key:
//!
//! 1. the challenge embedded in `clientDataJSON` must be the base64url form
//!    of the message the application asked to have signed;
//! 2. the signed payload is reassembled as
//!    `authenticatorData || SHA-256(clientDataJSON)`;
//! 3. the signature is reformatted from DER to its fixed-width form and
//!    verified with the `p256` crate.
//!
//! The cryptography itself lives entirely in `p256`; this crate only
//! bridges formats and applies the WebAuthn payload rules.

mod alg;
pub use alg::*;

mod assertion;
pub use assertion::*;

mod error;
pub use error::*;

mod key;
pub use key::*;
