#![warn(missing_docs)]

//! The logged-in account and its persistence.
//!
//! A wallet front end holds exactly one piece of durable state of its own:
//! which account is currently authenticated, along with the public key
//! material the wallet returned for it. This crate models that state as an
//! explicit, injectable [`AccountStore`] over a pluggable [`AccountBackend`]
//! rather than a module-level singleton, so tests can substitute a volatile
//! backend and applications can choose where the record lives.
//!
//! Lifecycle: the store is initialized from persisted state when opened,
//! mutated on successful authentication, and cleared on logout.

mod account;
pub use account::*;

mod backend;
pub use backend::*;

mod error;
pub use error::*;

mod store;
pub use store::*;
