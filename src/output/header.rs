// src/output/header.rs

use crate::config::Config;
use crate::output::literal::SHIFT_CONSTANT_NAME;
use anyhow::Result;
use std::io::Write;

/// Writes the module header: module/use/implicit lines, the shift constant
/// when the kind suffix is enabled, the length constant, and the array
/// declaration up to the opening `[&`.
///
/// `length` is the input file's byte count; the declared constant always
/// equals it exactly.
pub(crate) fn write_header(writer: &mut dyn Write, config: &Config, length: u64) -> Result<()> {
    writeln!(writer, "module {}", config.module_name)?;
    writeln!(
        writer,
        "    use, intrinsic :: iso_c_binding, only: c_int8_t, c_size_t"
    )?;
    writeln!(writer, "    implicit none")?;
    writeln!(writer)?;
    if config.use_suffix {
        writeln!(
            writer,
            "    integer(kind=c_int8_t), parameter :: {} = -128",
            SHIFT_CONSTANT_NAME
        )?;
    }
    writeln!(
        writer,
        "    integer(kind=c_size_t), parameter :: {} = {}",
        config.length_name, length
    )?;
    writeln!(
        writer,
        "    integer(kind=c_int8_t), dimension({}), &",
        config.length_name
    )?;
    // The bind(c) line carries the length constant's name, matching the
    // layout consumers of these modules already link against.
    writeln!(writer, "        bind(c, name=\"{}\")&", config.length_name)?;
    writeln!(writer, "        :: {} = [&", config.array_name)?;
    Ok(())
}
