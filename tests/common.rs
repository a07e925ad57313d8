// tests/common.rs

use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn fargen_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fargen"));
    // Keep stderr deterministic regardless of the caller's environment.
    cmd.env_remove("RUST_LOG");
    cmd
}

// Rejoins the wrapped array body and splits it into literal tokens.
// Continuation lines start with the joining comma, so concatenating the line
// contents (continuation markers stripped) yields one comma-separated list.
#[allow(dead_code)]
pub fn body_tokens(output: &str) -> Vec<String> {
    let mut joined = String::new();
    let mut in_body = false;
    for line in output.lines() {
        if line.ends_with("= [&") {
            in_body = true;
            continue;
        }
        if !in_body {
            continue;
        }
        let content = line.trim_start();
        if let Some(rest) = content.strip_suffix('&') {
            joined.push_str(rest);
        } else if let Some(rest) = content.strip_suffix(']') {
            joined.push_str(rest);
            break;
        }
    }
    // A zero-length array closes with a type spec instead of tokens.
    if joined.is_empty() || joined == "integer(kind=c_int8_t) ::" {
        return Vec::new();
    }
    joined.split(',').map(str::to_string).collect()
}
