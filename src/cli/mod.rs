//! CLI interface and argument parsing
//!
//! Defines the command-line surface with clap and drives the linear
//! pipeline: config resolution, pseudonymizer construction, read and
//! decode, substitute, write.

use crate::config::PseudonymizerConfig;
use crate::document;
use crate::domain::Result;
use crate::pseudonymization::generator::Gender;
use crate::pseudonymization::Pseudonymizer;
use clap::Parser;
use std::path::PathBuf;

/// Replaces names in text with pseudonyms
#[derive(Parser, Debug)]
#[command(name = "pseudonym")]
#[command(version, about = "Replaces names in text with pseudonyms.", long_about = None)]
pub struct Cli {
    /// Path to the input text file
    pub input_file: PathBuf,

    /// Path to the output text file
    pub output_file: PathBuf,

    /// Path to a file containing a list of names (one per line)
    #[arg(short = 'n', long = "name_list", value_name = "PATH")]
    pub name_list: Option<PathBuf>,

    /// Gender of names to generate
    #[arg(short = 'g', long = "gender", value_enum)]
    pub gender: Option<Gender>,

    /// Locale for generating fake names
    #[arg(short = 'l', long = "locale", default_value = "en_US")]
    pub locale: String,

    /// Logging level (DEBUG, INFO, WARNING, ERROR, CRITICAL)
    #[arg(long = "log_level", default_value = "INFO", value_name = "LEVEL")]
    pub log_level: String,
}

impl Cli {
    /// Run the pseudonymization pipeline
    ///
    /// Configuration failures (including a missing name-list file) surface
    /// before the input document is read.
    pub fn execute(&self) -> Result<()> {
        let config =
            PseudonymizerConfig::resolve(self.name_list.as_deref(), self.gender, &self.locale)?;
        let mut pseudonymizer = Pseudonymizer::new(&config)?;

        let text = document::read_document(&self.input_file)?;
        let output = pseudonymizer.pseudonymize(&text);
        document::write_document(&self.output_file, &output)?;

        tracing::info!(path = %self.output_file.display(), "Pseudonymized text written");
        println!("Pseudonymized text written to {}", self.output_file.display());
        Ok(())
    }
}
