//! # Pseudonym - name pseudonymization CLI
//!
//! Pseudonym scans a text document for substrings that look like personal
//! names (a capitalized-word-pair heuristic) and replaces each occurrence
//! with a pseudonym drawn from a user-supplied list or a locale-aware
//! synthetic name generator.
//!
//! ## Architecture
//!
//! The crate follows a layered layout:
//!
//! - [`cli`] - Command-line interface and pipeline driver
//! - [`config`] - Configuration resolution (name list vs. generator)
//! - [`pseudonymization`] - Detection, generation, and substitution
//! - [`document`] - Encoding detection, read, and UTF-8 write
//! - [`domain`] - Error types and the crate-wide `Result`
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pseudonym::config::PseudonymizerConfig;
//! use pseudonym::pseudonymization::Pseudonymizer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PseudonymizerConfig::resolve(None, None, "en_US")?;
//!     let mut pseudonymizer = Pseudonymizer::new(&config)?;
//!
//!     let output = pseudonymizer.pseudonymize("Alice Smith was here.");
//!     println!("{output}");
//!     Ok(())
//! }
//! ```
//!
//! ## Limitations
//!
//! Detection is a syntactic heuristic, not name-entity recognition: it
//! misses single-token and non-Latin names and false-positives on any
//! capitalized two-word phrase. Replacement keeps no mapping, so repeated
//! occurrences of the same name receive independent pseudonyms.

pub mod cli;
pub mod config;
pub mod document;
pub mod domain;
pub mod logging;
pub mod pseudonymization;
