// src/errors.rs

//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the errors that
//! can occur during a run, offering more context than generic I/O or
//! `anyhow` errors.

use thiserror::Error;

/// Application-specific errors used throughout `fargen`.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring while opening, inspecting, or reading the input file.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Usage Errors ---
    /// No input file path was given on the command line.
    #[error("no input file given (usage: fargen <FILE>)")]
    MissingInput,

    // --- Configuration Errors ---
    /// Invalid configuration settings (bad identifier, unusable line width).
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
