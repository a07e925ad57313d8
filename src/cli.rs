// src/cli.rs

use clap::Parser;

/// Generates a Fortran source module embedding the raw bytes of a file.
///
/// fargen reads the input file's bytes in order and prints a module whose body
/// is an array literal of signed 8-bit integer tokens, wrapped at a fixed line
/// width, plus the declarations needed to reference the array and its length
/// from C. The module is written to stdout so it can be dropped into a build
/// that compiles binary content directly into a program.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the file whose bytes will be embedded.
    ///
    /// Optional at the clap level so a missing path surfaces as this tool's
    /// own usage error (exit status 1) rather than clap's exit status 2.
    pub input_path: Option<String>,
}
