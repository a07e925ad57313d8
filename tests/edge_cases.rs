// tests/edge_cases.rs

mod common;

use assert_cmd::prelude::*;
use common::{body_tokens, fargen_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_empty_input_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let input = temp.path().join("empty.bin");
    fs::write(&input, "")?;

    let expected = "\
module arrgen_arrays_mod
    use, intrinsic :: iso_c_binding, only: c_int8_t, c_size_t
    implicit none

    integer(kind=c_int8_t), parameter :: UM = -128
    integer(kind=c_size_t), parameter :: ARRGEN_ALLN_TXT_LENGTH = 0
    integer(kind=c_int8_t), dimension(ARRGEN_ALLN_TXT_LENGTH), &
        bind(c, name=\"ARRGEN_ALLN_TXT_LENGTH\")&
        :: ARRGEN_ALLN_TXT = [&
        integer(kind=c_int8_t) ::]
end module arrgen_arrays_mod
";

    let output = fargen_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(expected)
        .get_output()
        .clone();
    assert!(body_tokens(&String::from_utf8(output.stdout)?).is_empty());

    temp.close()?;
    Ok(())
}

#[test]
fn test_single_byte_input() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let input = temp.path().join("one.bin");
    fs::write(&input, [42u8])?;

    fargen_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ARRGEN_ALLN_TXT_LENGTH = 1"))
        .stdout(predicate::str::contains("        42_1]\n"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_all_byte_values() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let input = temp.path().join("all.bin");
    let bytes: Vec<u8> = (0..=255u8).collect();
    fs::write(&input, &bytes)?;

    let output = fargen_cmd().arg(&input).assert().success().get_output().clone();
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("ARRGEN_ALLN_TXT_LENGTH = 256"));
    let tokens = body_tokens(&stdout);
    assert_eq!(tokens.len(), 256);
    assert_eq!(tokens[128], "UM");

    temp.close()?;
    Ok(())
}
