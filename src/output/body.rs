// src/output/body.rs

//! Emits the array-body block: one literal token per input byte, in order,
//! comma-separated and wrapped across continuation lines.

use crate::config::Config;
use crate::output::literal::literal;
use anyhow::Result;
use std::io::{self, Write};

/// Body line closing a zero-length array. Joined with the `[&` continuation
/// in the header it forms the typed empty constructor
/// `[integer(kind=c_int8_t) ::]`, which is valid where a bare `[]` is not.
const EMPTY_BODY_CLOSE: &str = "integer(kind=c_int8_t) ::]";

/// Streams `bytes` into the array body.
///
/// The first token primes the line buffer with no leading comma; every later
/// token is appended as `,<token>`, flushing a `&`-terminated continuation
/// line whenever the addition would not leave room for the marker. The final
/// line closes the constructor with `]` instead of a marker.
pub fn write_body<I>(writer: &mut dyn Write, config: &Config, bytes: I) -> Result<()>
where
    I: IntoIterator<Item = io::Result<u8>>,
{
    let mut bytes = bytes.into_iter();

    let first = match bytes.next() {
        Some(byte) => byte?,
        None => {
            writeln!(writer, "{}{}", config.indent, EMPTY_BODY_CLOSE)?;
            return Ok(());
        }
    };

    let mut line = String::with_capacity(config.max_line_length);
    line.push_str(&config.indent);
    line.push_str(&literal(first, config.use_suffix));
    let mut tokens: u64 = 1;

    for byte in bytes {
        let token = literal(byte?, config.use_suffix);
        // +1 for the joining comma, +1 reserved for the continuation marker.
        if line.len() + token.len() + 2 >= config.max_line_length {
            writeln!(writer, "{}&", line)?;
            line.clear();
            line.push_str(&config.indent);
        }
        line.push(',');
        line.push_str(&token);
        tokens += 1;
    }

    writeln!(writer, "{}]", line)?;
    log::debug!("Wrote {} literal tokens", tokens);
    Ok(())
}
