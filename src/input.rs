// src/input.rs

//! Input file access: open, size lookup, and lazy byte streaming.
//!
//! The file is opened once and held for the duration of the run (closed on all
//! exit paths when the handle drops). Bytes are produced as a single lazy
//! sequence over a buffered reader rather than slurped into memory, so the
//! encoder stays a one-pass loop bounded by file size.

use crate::errors::{io_error_with_path, Error};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// An opened input file with its size recorded up front.
#[derive(Debug)]
pub struct InputFile {
    path: PathBuf,
    size: u64,
    reader: BufReader<File>,
}

impl InputFile {
    /// Opens `path` for reading and records its size from metadata.
    ///
    /// # Errors
    /// Returns [`Error::Io`] when the path cannot be opened, its metadata
    /// cannot be read, or it does not name a regular file.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let metadata = std::fs::metadata(path).map_err(|e| io_error_with_path(e, path))?;
        if !metadata.is_file() {
            return Err(io_error_with_path(
                io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
                path,
            ));
        }
        let file = File::open(path).map_err(|e| io_error_with_path(e, path))?;
        log::debug!("Opened '{}' ({} bytes)", path.display(), metadata.len());
        Ok(Self {
            path: path.to_path_buf(),
            size: metadata.len(),
            reader: BufReader::new(file),
        })
    }

    /// The file's size in bytes, as reported by metadata before streaming.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The path this file was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consumes the handle and yields the file's bytes in order.
    pub fn bytes(self) -> impl Iterator<Item = io::Result<u8>> {
        self.reader.bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_open_reports_size_and_bytes() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("data.bin");
        fs::write(&file_path, [0u8, 127, 128, 255])?;

        let input = InputFile::open(&file_path)?;
        assert_eq!(input.size(), 4);
        assert_eq!(input.path(), file_path.as_path());

        let bytes: Vec<u8> = input.bytes().collect::<io::Result<_>>()?;
        assert_eq!(bytes, vec![0, 127, 128, 255]);

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_open_empty_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("empty.bin");
        fs::write(&file_path, "")?;

        let input = InputFile::open(&file_path)?;
        assert_eq!(input.size(), 0);
        assert_eq!(input.bytes().count(), 0);

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_open_missing_file() {
        let result = InputFile::open(Path::new("no_such_file_for_fargen_test.bin"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("no_such_file_for_fargen_test.bin"));
    }

    #[test]
    fn test_open_directory_is_rejected() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = InputFile::open(temp.path());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
        temp.close()?;
        Ok(())
    }
}
