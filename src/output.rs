//! # Output Module
//!
//! This module centralizes all user-facing output for copyright-headers.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! ## Design Goals
//!
//! - **Informative**: Show actionable information without requiring flags
//! - **Scannable**: Use formatting to make output easy to parse visually
//! - **Progressive**: More detail with `-v`, silence with `-q`
//! - **Scriptable**: Keep stdout predictable for piping/automation

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::{FileAction, FileReport, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  /// Success/current header
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Header rewritten or pending
  pub const UPDATED: &str = "\u{21bb}"; // ↻
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Print the initial "Checking N files..." or "Processing N files..." message.
pub fn print_start_message(file_count: usize, check_only: bool) {
  if is_quiet() {
    return;
  }

  let verb = if check_only { "Checking" } else { "Processing" };
  println!("{} {} {}...", verb, file_count, plural(file_count));
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the list of files whose header was rewritten.
pub fn print_rewritten_files(files: &[&FileReport]) {
  if is_quiet() || files.is_empty() {
    return;
  }

  let header = format!(
    "{} Rewrote header in {} {}:",
    symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.green()),
    files.len(),
    plural(files.len())
  );
  print_file_list(&header, files);
}

/// Print the list of files that need a rewrite (check mode).
///
/// In quiet mode only the bare paths are printed, for scripting.
pub fn print_pending_files(files: &[&FileReport]) {
  if files.is_empty() {
    return;
  }

  if is_quiet() {
    for file in files {
      println!("{}", file.path.display());
    }
    return;
  }

  let header = format!(
    "{} {} {} to rewrite:",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    files.len(),
    plural(files.len())
  );
  print_file_list(&header, files);
}

/// Print the list of files that failed, with their errors.
pub fn print_failed_files(files: &[&FileReport]) {
  if is_quiet() || files.is_empty() {
    return;
  }

  println!(
    "{} {} {} could not be processed:",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    files.len(),
    plural(files.len())
  );
  for file in files {
    match file.error {
      Some(ref error) => println!("  {} ({})", file.path.display(), error),
      None => println!("  {}", file.path.display()),
    }
  }
}

/// Print the success message when every file already has the current header.
pub fn print_all_current() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All files have the current header.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the processing summary.
///
/// Format: "Summary: X rewritten, Y current, Z failed"
/// Files whose rewrite changed nothing are added as "W unchanged" when present.
/// In verbose mode, also shows timing.
pub fn print_summary(summary: &ProcessingSummary, check_only: bool) {
  if is_quiet() {
    return;
  }

  let (changed_count, changed_word) = if check_only {
    (summary.would_rewrite, "to rewrite")
  } else {
    (summary.rewritten, "rewritten")
  };
  let failed_str = if summary.failed > 0 {
    summary.failed.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
  } else {
    summary.failed.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string()
  };

  let mut summary_line = format!(
    "Summary: {} {}, {} current, {} failed",
    changed_count.if_supports_color(Stream::Stdout, |s| s.cyan()),
    changed_word,
    summary.already_current.if_supports_color(Stream::Stdout, |s| s.cyan()),
    failed_str
  );

  if summary.unchanged > 0 {
    summary_line.push_str(&format!(
      ", {} unchanged",
      summary.unchanged.if_supports_color(Stream::Stdout, |s| s.cyan())
    ));
  }

  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", summary_line);
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

fn print_file_list(header: &str, files: &[&FileReport]) {
  println!("{}", header);

  let count = files.len();
  let limit = if is_verbose() { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in files.iter().take(limit) {
    println!("  {}", file.path.display());
  }

  if count > limit {
    println!(
      "  {} ... and {} more (use -v to see all)",
      "".if_supports_color(Stream::Stdout, |s| s.dimmed()),
      count - limit
    );
  }
}

const fn plural(count: usize) -> &'static str {
  if count == 1 { "file" } else { "files" }
}

/// File reports grouped for output.
pub struct CategorizedReports<'a> {
  /// Files whose header was rewritten
  pub rewritten: Vec<&'a FileReport>,
  /// Files that would be rewritten (check mode)
  pub pending: Vec<&'a FileReport>,
  /// Files that already carried the current header
  pub current: Vec<&'a FileReport>,
  /// Files whose rewrite matched their content
  pub unchanged: Vec<&'a FileReport>,
  /// Files that failed
  pub failed: Vec<&'a FileReport>,
}

impl<'a> CategorizedReports<'a> {
  /// Categorize a slice of file reports, keeping input order within groups.
  pub fn from_reports(reports: &'a [FileReport]) -> Self {
    let mut categorized = Self {
      rewritten: Vec::new(),
      pending: Vec::new(),
      current: Vec::new(),
      unchanged: Vec::new(),
      failed: Vec::new(),
    };

    for report in reports {
      match report.action {
        FileAction::Rewritten => categorized.rewritten.push(report),
        FileAction::WouldRewrite => categorized.pending.push(report),
        FileAction::AlreadyCurrent => categorized.current.push(report),
        FileAction::Unchanged => categorized.unchanged.push(report),
        FileAction::Failed => categorized.failed.push(report),
      }
    }

    categorized
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  fn create_test_report(path: &str, action: FileAction) -> FileReport {
    FileReport {
      path: PathBuf::from(path),
      action,
      error: None,
    }
  }

  #[test]
  fn test_categorize_reports_mixed() {
    let reports = vec![
      create_test_report("a.cpp", FileAction::Rewritten),
      create_test_report("b.cpp", FileAction::AlreadyCurrent),
      create_test_report("c.cpp", FileAction::Failed),
      create_test_report("d.cpp", FileAction::WouldRewrite),
      create_test_report("e.cpp", FileAction::Rewritten),
      create_test_report("f.cpp", FileAction::Unchanged),
    ];

    let categorized = CategorizedReports::from_reports(&reports);

    assert_eq!(categorized.rewritten.len(), 2);
    assert_eq!(categorized.rewritten[1].path, PathBuf::from("e.cpp"));
    assert_eq!(categorized.current.len(), 1);
    assert_eq!(categorized.failed.len(), 1);
    assert_eq!(categorized.pending.len(), 1);
    assert_eq!(categorized.unchanged.len(), 1);
  }

  #[test]
  fn test_categorize_reports_empty() {
    let categorized = CategorizedReports::from_reports(&[]);
    assert!(categorized.rewritten.is_empty());
    assert!(categorized.pending.is_empty());
    assert!(categorized.current.is_empty());
    assert!(categorized.unchanged.is_empty());
    assert!(categorized.failed.is_empty());
  }

  #[test]
  fn test_plural() {
    assert_eq!(plural(1), "file");
    assert_eq!(plural(0), "files");
    assert_eq!(plural(3), "files");
  }
}
