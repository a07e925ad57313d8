// src/output/writer.rs

//! Manages the output destination.
//!
//! The generated module goes exclusively to standard output. The locked
//! handle is wrapped in a buffer so the body's many short lines are not each
//! flushed through a separate write call.

use std::io::{self, BufWriter, StdoutLock};

/// Returns a buffered writer over locked stdout for the duration of a run.
pub fn stdout_writer() -> BufWriter<StdoutLock<'static>> {
    BufWriter::new(io::stdout().lock())
}
