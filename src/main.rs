use clap::Parser;
use pseudonym::cli::Cli;
use pseudonym::logging::init_logging;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    if let Err(e) = cli.execute() {
        tracing::error!(error = %e, "Pseudonymization failed");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
