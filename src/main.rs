// src/main.rs

use clap::Parser;
use fargen::cli::Cli;
use fargen::Config;

fn main() {
    // Initialize logging. Controlled by RUST_LOG; silent by default so
    // diagnostics never mix into the generated module on stdout.
    env_logger::init();

    log::debug!("Starting fargen v{}...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    // --- Configuration & Execution ---
    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("fargen: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    if let Err(e) = fargen::run(&config) {
        eprintln!("fargen: {:#}", e);
        std::process::exit(1);
    }
}
