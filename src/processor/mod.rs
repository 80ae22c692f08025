//! # Processor Module
//!
//! This module contains the core functionality for rewriting copyright headers
//! in files.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`content_transformer`] - Old-header stripping, assembly, line endings
//!
//! The [`Processor`] struct is the main entry point for all file operations,
//! orchestrating the submodules to provide a cohesive API.

mod content_transformer;
mod file_io;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
pub use content_transformer::{ContentTransformer, LineEndings, normalize_line_endings, strip_old_header};
pub use file_io::{FileError, FileIO};
use tracing::{debug, warn};

use crate::detection::{HeaderDetector, MarkerDetector};
use crate::diff::DiffManager;
use crate::header::render_header;
use crate::logging::report_file_error;
use crate::report::FileReport;
use crate::verbose_log;

/// Configuration for creating a Processor instance.
///
/// The default configuration rewrites files in place, keeps going after a
/// failed file, and normalizes line endings to `\n`.
#[derive(Default)]
pub struct ProcessorConfig {
  /// Report what would change without writing anything
  pub check_only: bool,
  /// Abort the run on the first failed file
  pub fail_fast: bool,
  pub line_endings: LineEndings,
  pub diff_manager: Option<DiffManager>,
  pub detector: Option<Box<dyn HeaderDetector>>,
}

/// Terminal state of a file that was processed without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
  /// The file already carried the current header; it was not touched.
  AlreadyCurrent,
  /// The header was rewritten and the file overwritten.
  Rewritten,
  /// Check mode: the header would have been rewritten.
  WouldRewrite,
  /// The rewritten content matched the file byte for byte; nothing was written.
  Unchanged,
}

/// Result of processing a list of paths.
#[derive(Debug, Default)]
pub struct RunResult {
  /// One report per path, in input order
  pub reports: Vec<FileReport>,
  /// Whether any path failed
  pub has_failures: bool,
}

/// Processor for rewriting copyright headers.
///
/// Each path is handled on its own: read, checked for the current header,
/// rewritten in memory and written back. Nothing is shared between paths.
pub struct Processor {
  /// Whether to only check without modifying files
  check_only: bool,

  /// Whether the first failure aborts the run
  fail_fast: bool,

  /// Manager for handling diff creation and rendering
  diff_manager: DiffManager,

  /// Detector for files that already carry the current header
  detector: Box<dyn HeaderDetector>,

  /// Content transformer for header stripping and assembly
  content_transformer: ContentTransformer,
}

impl Default for Processor {
  fn default() -> Self {
    Self::new(ProcessorConfig::default())
  }
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  pub fn new(config: ProcessorConfig) -> Self {
    Self {
      check_only: config.check_only,
      fail_fast: config.fail_fast,
      diff_manager: config.diff_manager.unwrap_or_default(),
      detector: config.detector.unwrap_or_else(|| Box::new(MarkerDetector::new())),
      content_transformer: ContentTransformer::new(config.line_endings),
    }
  }

  /// Processes every path in order.
  ///
  /// A failed path is reported on stderr and recorded as failed, and the
  /// remaining paths are still processed. With `fail_fast` set, the first
  /// failure is returned as an error instead.
  ///
  /// # Parameters
  ///
  /// * `paths` - File paths; surrounding whitespace is ignored
  ///
  /// # Errors
  ///
  /// Only in `fail_fast` mode, with the error of the first failed path.
  pub fn process(&self, paths: &[String]) -> Result<RunResult> {
    let mut result = RunResult {
      reports: Vec::with_capacity(paths.len()),
      has_failures: false,
    };

    for raw in paths {
      let path = PathBuf::from(raw.trim());
      match self.process_file(raw) {
        Ok(outcome) => result.reports.push(FileReport::from_outcome(path, outcome)),
        Err(e) => {
          if self.fail_fast {
            return Err(e).with_context(|| format!("Stopping at {:?}", raw.trim()));
          }
          report_file_error(&path, &e);
          result.has_failures = true;
          result.reports.push(FileReport::failed(path, &e));
        }
      }
    }

    debug!(
      "Processed {} path(s), {} failed",
      result.reports.len(),
      result.reports.iter().filter(|r| r.error.is_some()).count()
    );

    Ok(result)
  }

  /// Rewrites the header of a single file.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file; surrounding whitespace is ignored
  ///
  /// # Returns
  ///
  /// What happened to the file. The file is written at most once, and only
  /// after the complete new content has been built.
  ///
  /// # Errors
  ///
  /// Returns a [`FileError`] if the path is empty or the file cannot be read or
  /// written.
  pub fn process_file(&self, path: &str) -> Result<FileOutcome, FileError> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
      return Err(FileError::EmptyPath);
    }
    let path = Path::new(trimmed);
    verbose_log!("Processing file: {}", path.display());

    let content = FileIO::read_full_content(path)?;

    if self.detector.has_current_header(&content) {
      debug!("Skipping {}: already has the current header", path.display());
      return Ok(FileOutcome::AlreadyCurrent);
    }

    let new_content = self.render(path, &content);
    if new_content == content {
      debug!("Rendered content of {} is unchanged", path.display());
      return Ok(FileOutcome::Unchanged);
    }

    if self.diff_manager.is_enabled()
      && let Err(e) = self.diff_manager.display_diff(path, &content, &new_content)
    {
      warn!("Failed to display diff for {}: {:#}", path.display(), e);
    }

    if self.check_only {
      debug!("Would rewrite header in {}", path.display());
      return Ok(FileOutcome::WouldRewrite);
    }

    FileIO::write_file(path, &new_content)?;
    debug!("Rewrote header in {}", path.display());
    Ok(FileOutcome::Rewritten)
  }

  /// Builds the rewritten content for `path` without touching the disk.
  pub fn render(&self, path: &Path, content: &str) -> String {
    let file_name = path
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_default();
    let header = render_header(&file_name);
    self.content_transformer.rewrite(content, &header)
  }
}
