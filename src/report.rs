//! # Report Module
//!
//! This module records what happened to every file in a run and can write that
//! record out as a JSON report.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::processor::{FileError, FileOutcome};

/// Information about a processed file for reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
  /// Path to the file, as given on the command line (trimmed)
  #[serde(with = "path_serialization")]
  pub path: PathBuf,
  /// What happened to the file
  pub action: FileAction,
  /// Error message for failed files
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl FileReport {
  pub fn from_outcome(path: PathBuf, outcome: FileOutcome) -> Self {
    Self {
      path,
      action: outcome.into(),
      error: None,
    }
  }

  pub fn failed(path: PathBuf, error: &FileError) -> Self {
    Self {
      path,
      action: FileAction::Failed,
      error: Some(error.to_string()),
    }
  }
}

/// Possible actions taken on a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
  /// Header was rewritten in place
  Rewritten,
  /// Header would be rewritten (check mode)
  WouldRewrite,
  /// File already carried the current header and was left alone
  AlreadyCurrent,
  /// Rewriting produced identical content, so the file was left alone
  Unchanged,
  /// File could not be read or written
  Failed,
}

impl From<FileOutcome> for FileAction {
  fn from(outcome: FileOutcome) -> Self {
    match outcome {
      FileOutcome::Rewritten => FileAction::Rewritten,
      FileOutcome::WouldRewrite => FileAction::WouldRewrite,
      FileOutcome::AlreadyCurrent => FileAction::AlreadyCurrent,
      FileOutcome::Unchanged => FileAction::Unchanged,
    }
  }
}

/// Helper module for serializing/deserializing PathBuf
mod path_serialization {
  use std::path::PathBuf;

  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(path: &std::path::Path, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&path.to_string_lossy())
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
  }
}

/// Summary of the processing results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingSummary {
  /// Total number of paths handled
  pub total_files: usize,
  /// Number of files rewritten
  pub rewritten: usize,
  /// Number of files that would be rewritten (check mode)
  pub would_rewrite: usize,
  /// Number of files that already had the current header
  pub already_current: usize,
  /// Number of files whose rewrite matched their content
  #[serde(default)]
  pub unchanged: usize,
  /// Number of files that failed
  pub failed: usize,
  /// Total processing time
  #[serde(skip)]
  pub processing_time: Duration,
  /// Processing time in seconds for serialization
  #[serde(rename = "processing_time_seconds")]
  pub processing_time_secs: f64,
  /// Timestamp when the summary was created
  #[serde(skip_serializing_if = "Option::is_none")]
  pub timestamp: Option<i64>,
}

impl ProcessingSummary {
  /// Create a new ProcessingSummary initialized to zero
  pub fn new(processing_time: Duration) -> Self {
    Self {
      total_files: 0,
      rewritten: 0,
      would_rewrite: 0,
      already_current: 0,
      unchanged: 0,
      failed: 0,
      processing_time,
      processing_time_secs: processing_time.as_secs_f64(),
      timestamp: Some(Local::now().timestamp()),
    }
  }

  /// Create a ProcessingSummary from a collection of FileReports
  pub fn from_reports(files: &[FileReport], processing_time: Duration) -> Self {
    let mut summary = Self::new(processing_time);
    summary.total_files = files.len();

    for file in files {
      match file.action {
        FileAction::Rewritten => summary.rewritten += 1,
        FileAction::WouldRewrite => summary.would_rewrite += 1,
        FileAction::AlreadyCurrent => summary.already_current += 1,
        FileAction::Unchanged => summary.unchanged += 1,
        FileAction::Failed => summary.failed += 1,
      }
    }

    summary
  }
}

/// On-disk shape of a JSON report.
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
  pub generated_at: String,
  pub summary: ProcessingSummary,
  pub files: Vec<FileReport>,
}

/// Report Generator for writing JSON run reports
pub struct ReportGenerator<'a> {
  /// Path where the report will be saved
  output_path: &'a Path,
}

impl<'a> ReportGenerator<'a> {
  pub const fn new(output_path: &'a Path) -> Self {
    Self { output_path }
  }

  /// Generate a report from a collection of file reports
  ///
  /// # Returns
  ///
  /// `Ok(())` if the report was written, or an error if it couldn't be
  /// serialized or written to disk.
  pub fn generate(&self, files: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
    let report = Report {
      generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
      summary: summary.clone(),
      files: files.to_vec(),
    };
    let content = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;

    fs::write(self.output_path, content)
      .with_context(|| format!("Failed to write report to {}", self.output_path.display()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn report(path: &str, action: FileAction) -> FileReport {
    FileReport {
      path: PathBuf::from(path),
      action,
      error: None,
    }
  }

  #[test]
  fn test_summary_counts() {
    let reports = vec![
      report("a.cpp", FileAction::Rewritten),
      report("b.cpp", FileAction::Rewritten),
      report("c.cpp", FileAction::AlreadyCurrent),
      report("d.cpp", FileAction::Failed),
      report("e.cpp", FileAction::WouldRewrite),
      report("f.cpp", FileAction::Unchanged),
    ];

    let summary = ProcessingSummary::from_reports(&reports, Duration::from_millis(1500));
    assert_eq!(summary.total_files, 6);
    assert_eq!(summary.unchanged, 1);
    assert_eq!(summary.rewritten, 2);
    assert_eq!(summary.already_current, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.would_rewrite, 1);
    assert!((summary.processing_time_secs - 1.5).abs() < f64::EPSILON);
  }

  #[test]
  fn test_action_serialization() {
    assert_eq!(
      serde_json::to_string(&FileAction::AlreadyCurrent).unwrap(),
      "\"already_current\""
    );
    assert_eq!(serde_json::to_string(&FileAction::WouldRewrite).unwrap(), "\"would_rewrite\"");
    assert_eq!(serde_json::to_string(&FileAction::Unchanged).unwrap(), "\"unchanged\"");
  }

  #[test]
  fn test_error_omitted_when_absent() {
    let json = serde_json::to_string(&report("a.cpp", FileAction::Rewritten)).unwrap();
    assert_eq!(json, r#"{"path":"a.cpp","action":"rewritten"}"#);
  }
}
