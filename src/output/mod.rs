// src/output/mod.rs

use crate::config::Config;
use crate::input::InputFile;
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

pub mod body;
pub mod header;
pub mod literal;
pub mod writer; // Manages the output destination

/// Generates the complete Fortran module for `config`'s input file.
///
/// Opens the input, looks up its size, then emits header, array body, and
/// footer in one sequential pass. The writer is flushed before returning.
pub fn write_module(writer: &mut dyn Write, config: &Config) -> Result<()> {
    debug!("Starting module generation...");

    let input = InputFile::open(&config.input_path)?;
    let length = input.size();

    header::write_header(writer, config, length)?;
    body::write_body(writer, config, input.bytes())
        .with_context(|| format!("Failed while embedding '{}'", config.input_path.display()))?;
    writeln!(writer, "end module {}", config.module_name)?;

    debug!("Module generation complete.");
    writer.flush()?;
    Ok(())
}
