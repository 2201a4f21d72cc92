//! List-backed pseudonym source

use super::NameGenerator;
use crate::domain::{PseudonymError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses uniformly at random among the entries of a user-supplied list
///
/// Order and duplicates from the source file are preserved, so a duplicated
/// entry is proportionally more likely to be chosen.
pub struct ListGenerator {
    names: Vec<String>,
    rng: StdRng,
}

impl ListGenerator {
    /// Create a generator over a non-empty name list
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(PseudonymError::Configuration(
                "Name list is empty".to_string(),
            ));
        }
        Ok(Self {
            names,
            rng: StdRng::from_entropy(),
        })
    }

    #[cfg(test)]
    fn with_rng(names: Vec<String>, rng: StdRng) -> Result<Self> {
        let mut generator = Self::new(names)?;
        generator.rng = rng;
        Ok(generator)
    }
}

impl NameGenerator for ListGenerator {
    fn generate(&mut self) -> String {
        // Constructor guarantees a non-empty list
        let index = self.rng.gen_range(0..self.names.len());
        self.names[index].clone()
    }
}
