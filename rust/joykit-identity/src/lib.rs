#![warn(missing_docs)]

//! Classification of the strings a passkey wallet front end accepts from
//! users and configuration: account identifiers, hostnames, callback URLs,
//! and asset references.
//!
//! The predicates in this crate are total functions over their string input
//! with no failure path; malformed input simply classifies as `false`. The
//! typed [`JoyId`] identifier offers the same rules as a parse with
//! descriptive errors instead.

mod joy_id;
pub use joy_id::*;

mod predicates;
pub use predicates::*;
