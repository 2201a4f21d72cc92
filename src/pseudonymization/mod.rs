//! Name pseudonymization engine
//!
//! Coordinates detection and substitution: every name-shaped span found by
//! the [`NameDetector`] is replaced with a freshly generated pseudonym from
//! the configured [`NameGenerator`]. Occurrences of the same original name
//! are replaced independently; no mapping is kept between runs or matches.

pub mod detector;
pub mod generator;

use crate::config::PseudonymizerConfig;
use crate::domain::Result;
use detector::NameDetector;
use generator::{FakerGenerator, ListGenerator, NameGenerator};
use regex::Captures;

/// Replaces name-shaped spans in text with pseudonyms
pub struct Pseudonymizer {
    detector: NameDetector,
    generator: Box<dyn NameGenerator>,
}

impl Pseudonymizer {
    /// Build a pseudonymizer from resolved configuration
    ///
    /// A non-empty name list takes precedence over the synthetic generator.
    /// Fails with a configuration error if the locale is unsupported.
    pub fn new(config: &PseudonymizerConfig) -> Result<Self> {
        let generator: Box<dyn NameGenerator> = match &config.name_source {
            Some(names) if !names.is_empty() => Box::new(ListGenerator::new(names.clone())?),
            _ => Box::new(FakerGenerator::new(&config.locale, config.gender)?),
        };
        Self::with_generator(generator)
    }

    /// Build a pseudonymizer over an explicit generator
    ///
    /// Primarily for tests that need a deterministic pseudonym source.
    pub fn with_generator(generator: Box<dyn NameGenerator>) -> Result<Self> {
        Ok(Self {
            detector: NameDetector::new()?,
            generator,
        })
    }

    /// Replace every name-shaped span with a freshly generated pseudonym
    ///
    /// Characters outside matches pass through unchanged.
    pub fn pseudonymize(&mut self, text: &str) -> String {
        let generator = &mut self.generator;
        self.detector
            .pattern()
            .replace_all(text, |_: &Captures| generator.generate())
            .into_owned()
    }
}
