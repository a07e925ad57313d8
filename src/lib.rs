//! `fargen` is a library and command-line tool that embeds the raw bytes of a
//! file in a generated Fortran source module.
//!
//! It reads the input file's bytes in order and emits a module whose body is a
//! comma-separated list of signed 8-bit integer literals representing those
//! bytes, wrapped at a configured maximum line width, plus header and footer
//! declarations establishing the array's name, its length constant, and C
//! linkage. A downstream Fortran build compiles the module to carry the
//! original binary content at compile time.
//!
//! The pass is single-threaded and fully synchronous: open the input, emit the
//! header, stream bytes into wrapped literal lines, close the array, emit the
//! footer. Identical input and configuration always produce byte-identical
//! output.
//!
//! # Example: Library Usage
//!
//! The following example embeds a small file into a module captured in a
//! buffer instead of stdout.
//!
//! ```
//! use fargen::{write_module, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a file to embed.
//! let temp_dir = tempdir().unwrap();
//! let input = temp_dir.path().join("blob.bin");
//! fs::write(&input, [0u8, 127, 128, 255]).unwrap();
//!
//! // 2. Create a Config object programmatically using the builder.
//! let config = ConfigBuilder::new()
//!     .input_path(input.to_str().unwrap())
//!     .build()
//!     .unwrap();
//!
//! // 3. Generate the module into a buffer.
//! let mut output = Vec::new();
//! write_module(&mut output, &config).unwrap();
//!
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.starts_with("module arrgen_arrays_mod"));
//! assert!(text.contains("0_1,127_1,UM,127_1]"));
//! ```

// Make modules public if they contain public types used in the API
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod input;
pub mod output;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder};
pub use errors::Error;
pub use output::write_module;

use anyhow::Result;
use std::io::Write; // Import Write trait

/// Executes a complete run: streams the configured input file and writes the
/// generated module to standard output.
///
/// This is the entry point the binary uses. To capture the output in memory,
/// call [`write_module`] with your own writer instead, as shown in the
/// crate-level example.
///
/// # Errors
/// Propagates I/O failures from opening or reading the input file and from
/// writing to stdout.
pub fn run(config: &Config) -> Result<()> {
    let mut writer = output::writer::stdout_writer();
    write_module(&mut writer, config)?;
    writer.flush()?;
    Ok(())
}
