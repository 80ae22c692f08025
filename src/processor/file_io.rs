//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! It encapsulates synchronous file operations and maps their failures onto
//! [`FileError`].

use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while rewriting a single file.
///
/// Every variant is terminal for the affected path only; the processor decides
/// whether the run continues with the remaining paths.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
  /// The path argument was empty once surrounding whitespace was removed.
  #[error("Empty file path")]
  EmptyPath,

  /// The file could not be opened, read, or decoded as UTF-8.
  #[error("Failed to read file {}: {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The rewritten content could not be written back.
  #[error("Failed to write file {}: {source}", .path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl FileError {
  /// The path the error refers to, if any.
  pub fn path(&self) -> Option<&Path> {
    match self {
      Self::EmptyPath => None,
      Self::Read { path, .. } | Self::Write { path, .. } => Some(path),
    }
  }
}

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Read full file content.
  ///
  /// The file handle is closed before this returns, so a following
  /// [`FileIO::write_file`] on the same path never overlaps with it.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to read
  ///
  /// # Returns
  ///
  /// The complete file content as a String. Content that is not valid UTF-8 is
  /// reported as [`FileError::Read`].
  pub fn read_full_content(path: &Path) -> Result<String, FileError> {
    std::fs::read_to_string(path).map_err(|source| FileError::Read {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Write file content, truncating whatever was there before.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to write
  /// * `content` - Content to write to the file
  pub fn write_file(path: &Path, content: &str) -> Result<(), FileError> {
    std::fs::write(path, content).map_err(|source| FileError::Write {
      path: path.to_path_buf(),
      source,
    })
  }
}
