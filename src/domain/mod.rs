//! Domain types for the pseudonymizer
//!
//! Provides the error hierarchy ([`PseudonymError`]) and the crate-wide
//! [`Result`] alias.

pub mod errors;
pub mod result;

pub use errors::PseudonymError;
pub use result::Result;
