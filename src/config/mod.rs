//! Defines the core `Config` struct for a generation run.
//!
//! This module consolidates all the settings parsed and validated from the CLI
//! (or assembled programmatically through [`ConfigBuilder`]), making them
//! available to the rest of the application in a structured and type-safe
//! manner. There is deliberately no global state: a `Config` is an explicit
//! value passed into the encoder, so tests can run several configurations
//! in-process.

use crate::constants;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;

/// Settings for one generation run.
///
/// This struct holds all the settings parsed and validated from the CLI,
/// ready to be used by the core logic (input streaming, output generation).
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the file whose bytes are embedded.
    pub input_path: PathBuf,
    /// Name of the generated Fortran module.
    pub module_name: String,
    /// Name of the generated length constant.
    pub length_name: String,
    /// Name of the generated array.
    pub array_name: String,
    /// Indentation prefix for array-body lines.
    pub indent: String,
    /// Whether literal tokens carry the `_1` kind suffix (and byte 128 the `UM` constant).
    pub use_suffix: bool,
    /// Maximum length of an emitted physical line, continuation marker included.
    pub max_line_length: usize,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            input_path: PathBuf::new(),
            module_name: constants::DEFAULT_MODULE_NAME.to_string(),
            length_name: constants::DEFAULT_LENGTH_NAME.to_string(),
            array_name: constants::DEFAULT_ARRAY_NAME.to_string(),
            indent: constants::DEFAULT_INDENT.to_string(),
            use_suffix: constants::DEFAULT_USE_SUFFIX,
            max_line_length: constants::DEFAULT_MAX_LINE_LENGTH,
        }
    }
}
