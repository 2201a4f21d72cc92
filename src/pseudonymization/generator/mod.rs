//! Pseudonym sources
//!
//! Provides the [`NameGenerator`] trait and its two implementations: a
//! uniform-random chooser over a user-supplied name list and a synthetic
//! generator backed by the `fake` crate.

pub mod faker;
pub mod list;

use clap::ValueEnum;

pub use faker::FakerGenerator;
pub use list::ListGenerator;

/// Gender filter for synthetic name generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Gender {
    Male,
    Female,
}

/// Trait for pseudonym source implementations
///
/// Produces one full name per call with no memory of prior calls; repeats
/// are allowed and expected. Implementations validate their configuration
/// at construction so that `generate` itself is infallible.
pub trait NameGenerator {
    /// Produce one pseudonym
    fn generate(&mut self) -> String;
}
