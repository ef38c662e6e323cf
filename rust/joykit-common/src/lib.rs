#![warn(missing_docs)]

//! This crate constitutes a library of light weight helpers that are shared
//! across multiple other crates in this workspace. Their chief quality is
//! that they have virtually zero dependencies.

mod sync;
pub use sync::*;

mod debounce;
pub use debounce::*;
