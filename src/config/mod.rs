//! Configuration resolution
//!
//! Decides the pseudonym source (literal name list vs. synthetic generator)
//! and carries the generator parameters. Name-list loading failures are
//! surfaced here, before the input document is ever touched.

use crate::domain::{PseudonymError, Result};
use crate::pseudonymization::generator::Gender;
use std::fs;
use std::path::Path;

/// Resolved configuration for one pseudonymizer run
#[derive(Debug, Clone)]
pub struct PseudonymizerConfig {
    /// Literal pseudonyms, in file order with duplicates preserved
    pub name_source: Option<Vec<String>>,
    /// Gender filter for synthetic generation; ignored when a non-empty
    /// name list is configured
    pub gender: Option<Gender>,
    /// Locale identifier for synthetic name generation, e.g. `en_US`
    pub locale: String,
}

impl PseudonymizerConfig {
    /// Resolve configuration from CLI inputs
    ///
    /// Supplying both a name list and a gender filter is not an error: the
    /// name list wins and a warning is emitted.
    pub fn resolve(
        name_list: Option<&Path>,
        gender: Option<Gender>,
        locale: &str,
    ) -> Result<Self> {
        if name_list.is_some() && gender.is_some() {
            tracing::warn!(
                "Both --name_list and --gender are specified. Using --name_list and ignoring --gender."
            );
        }

        let name_source = match name_list {
            Some(path) => Some(load_name_list(path)?),
            None => None,
        };

        Ok(Self {
            name_source,
            gender,
            locale: locale.to_string(),
        })
    }
}

/// Load a name list: one name per line, trimmed, order and duplicates kept
///
/// Empty lines are dropped rather than kept as empty-string pseudonyms.
fn load_name_list(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(PseudonymError::FileNotFound(format!(
            "Name list file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PseudonymError::Io(format!(
            "Failed to read name list file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut names: Vec<String> = contents.lines().map(|line| line.trim().to_string()).collect();
    let total = names.len();
    names.retain(|name| !name.is_empty());
    let dropped = total - names.len();
    if dropped > 0 {
        tracing::debug!(dropped, "Dropped empty lines from name list");
    }

    tracing::debug!(count = names.len(), path = %path.display(), "Loaded name list");
    Ok(names)
}
