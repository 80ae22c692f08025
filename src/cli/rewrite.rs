//! # Rewrite Command
//!
//! This module implements the only command: rewrite (or check) the copyright
//! header of every file named on the command line.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::diff::DiffManager;
use crate::info_log;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{
  CategorizedReports, print_all_current, print_blank_line, print_failed_files, print_hint, print_pending_files,
  print_rewritten_files, print_start_message, print_summary,
};
use crate::processor::{LineEndings, Processor, ProcessorConfig};
use crate::report::{ProcessingSummary, ReportGenerator};

/// Message printed to stdout when no file is given.
pub const USAGE_MESSAGE: &str =
  "Invalid usage of copyright-headers, it should be called with a path to one or multiple files.";

/// Arguments for the rewrite command
#[derive(Args, Debug, Default)]
pub struct RewriteArgs {
  /// Files whose header should be rewritten
  #[arg(required = false, value_name = "FILE")]
  pub paths: Vec<String>,

  /// Check mode: list files whose header would change without modifying them
  #[arg(long)]
  pub check: bool,

  /// Show a diff of every change
  #[arg(long)]
  pub show_diff: bool,

  /// Save a diff of every change to a file
  #[arg(long, short = 'o', value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Stop at the first file that cannot be read or written
  #[arg(long)]
  pub fail_fast: bool,

  /// Write CRLF files back with CRLF line endings instead of converting to LF
  #[arg(long)]
  pub preserve_line_endings: bool,

  /// Generate a JSON report of the run and save it to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl RewriteArgs {
  /// Validate the arguments and return an error if invalid
  fn validate(&self) -> Result<(), &'static str> {
    if self.paths.is_empty() {
      return Err(USAGE_MESSAGE);
    }
    Ok(())
  }
}

/// Run the rewrite command with the given arguments
pub fn run_rewrite(args: RewriteArgs) -> Result<()> {
  if let Err(usage) = args.validate() {
    println!("{usage}");
    process::exit(1);
  }

  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and info_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff);
  diff_manager.init()?;

  let line_endings = if args.preserve_line_endings {
    LineEndings::Preserve
  } else {
    LineEndings::Normalize
  };
  debug!("Line endings: {:?}, fail fast: {}", line_endings, args.fail_fast);

  let processor = Processor::new(ProcessorConfig {
    check_only: args.check,
    fail_fast: args.fail_fast,
    line_endings,
    diff_manager: Some(diff_manager),
    detector: None, // Use the default MarkerDetector
  });

  print_start_message(args.paths.len(), args.check);

  let start_time = Instant::now();
  let result = processor.process(&args.paths)?;
  let elapsed = start_time.elapsed();

  let summary = ProcessingSummary::from_reports(&result.reports, elapsed);
  let categorized = CategorizedReports::from_reports(&result.reports);
  let has_pending = !categorized.pending.is_empty();

  print_blank_line();

  if categorized.rewritten.is_empty() && !has_pending && !result.has_failures {
    print_all_current();
  } else {
    print_rewritten_files(&categorized.rewritten);
    if has_pending {
      if !categorized.rewritten.is_empty() {
        print_blank_line();
      }
      print_pending_files(&categorized.pending);
    }
    if result.has_failures {
      print_blank_line();
      print_failed_files(&categorized.failed);
    }
  }

  print_blank_line();
  print_summary(&summary, args.check);

  if has_pending {
    print_blank_line();
    print_hint("Run without --check to rewrite these headers.");
  }

  if let Some(ref output_path) = args.report_json {
    let report_generator = ReportGenerator::new(output_path);
    if let Err(e) = report_generator.generate(&result.reports, &summary) {
      eprintln!("Error generating JSON report: {:#}", e);
    } else {
      info_log!("Generated JSON report at {}", output_path.display());
    }
  }

  if result.has_failures || has_pending {
    process::exit(1);
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_validate_requires_paths() {
    let args = RewriteArgs::default();
    assert_eq!(args.validate(), Err(USAGE_MESSAGE));

    let args = RewriteArgs {
      paths: vec!["a.cpp".to_string()],
      ..Default::default()
    };
    assert!(args.validate().is_ok());
  }
}
