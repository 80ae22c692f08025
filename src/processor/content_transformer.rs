//! # Content Transformer Module
//!
//! This module turns original file content into rewritten content: it drops a
//! leading old-style header block (and the blank lines before it), puts the new
//! header in front of what remains, and handles line endings.

use std::borrow::Cow;

use tracing::trace;

use crate::header::{BORDER_MARKER, COMMENT_OPEN};

/// How line endings of the original file are treated on write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEndings {
  /// Convert everything to `\n`.
  #[default]
  Normalize,
  /// Write CRLF files back with `\r\n` throughout, header included.
  Preserve,
}

/// Content transformation utilities for header rewriting.
pub struct ContentTransformer {
  line_endings: LineEndings,
}

impl ContentTransformer {
  /// Creates a new ContentTransformer with the given line-ending policy.
  pub const fn new(line_endings: LineEndings) -> Self {
    Self { line_endings }
  }

  /// Produces the rewritten file content.
  ///
  /// The result is `header` followed by every line of `content` left after
  /// [`strip_old_header`], each terminated by a line feed (or `\r\n` when
  /// preserving a CRLF file).
  ///
  /// # Parameters
  ///
  /// * `content` - The original file content
  /// * `header` - The rendered header, including its trailing blank line
  pub fn rewrite(&self, content: &str, header: &str) -> String {
    let uses_crlf = content.contains("\r\n");
    let normalized = normalize_line_endings(content);
    let remainder = strip_old_header(&normalized);

    let body_len: usize = remainder.iter().map(|line| line.len() + 1).sum();
    let mut text = String::with_capacity(header.len() + body_len);
    text.push_str(header);
    for line in remainder {
      text.push_str(line);
      text.push('\n');
    }

    if self.line_endings == LineEndings::Preserve && uses_crlf {
      text.replace('\n', "\r\n")
    } else {
      text
    }
  }
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(content: &str) -> Cow<'_, str> {
  if content.contains('\r') {
    Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
  } else {
    Cow::Borrowed(content)
  }
}

/// Splits content on `\n`. A final line feed terminates the last line rather
/// than opening an empty one.
fn split_lines(content: &str) -> Vec<&str> {
  content.strip_suffix('\n').unwrap_or(content).split('\n').collect()
}

/// Returns the lines of `content` that follow the old header.
///
/// Leading blank lines are always dropped. If the first non-blank line contains
/// [`BORDER_MARKER`], every following line that starts with [`COMMENT_OPEN`] is
/// dropped too; the first line that does not is kept unless it is blank.
/// Anything else leaves the content from the first non-blank line on intact.
pub fn strip_old_header(content: &str) -> Vec<&str> {
  let lines = split_lines(content);
  let mut idx = lines.iter().take_while(|line| line.trim().is_empty()).count();
  let mut kept = Vec::with_capacity(lines.len().saturating_sub(idx));

  if lines.get(idx).is_some_and(|line| line.contains(BORDER_MARKER)) {
    let start = idx;
    while let Some(line) = lines.get(idx) {
      idx += 1;
      if !line.starts_with(COMMENT_OPEN) {
        if !line.trim().is_empty() {
          kept.push(*line);
        }
        break;
      }
    }
    trace!("Dropped old header spanning lines {}..{}", start + 1, idx);
  } else {
    trace!("No old header found after {} blank line(s)", idx);
  }

  kept.extend_from_slice(&lines[idx..]);
  kept
}

#[cfg(test)]
mod tests {
  use super::*;

  const OLD_HEADER: &str = "/**************************************************************************/\n\
/*  node.cpp                                                              */\n\
/**************************************************************************/\n\
/*                         This file is part of:                          */\n\
/*                             GODOT ENGINE                               */\n\
/**************************************************************************/\n";

  fn rewrite(content: &str) -> String {
    ContentTransformer::new(LineEndings::Normalize).rewrite(content, "HEADER\n\n")
  }

  #[test]
  fn test_no_header_keeps_everything() {
    let content = "#include <x>\n\nint main() {}\n";
    assert_eq!(rewrite(content), format!("HEADER\n\n{content}"));
  }

  #[test]
  fn test_old_header_dropped() {
    let content = format!("{OLD_HEADER}\n#include \"node.h\"\n\nvoid f() {{}}\n");
    assert_eq!(rewrite(&content), "HEADER\n\n#include \"node.h\"\n\nvoid f() {}\n");
  }

  #[test]
  fn test_non_blank_terminator_kept() {
    let content = format!("{OLD_HEADER}#include \"node.h\"\n");
    assert_eq!(rewrite(&content), "HEADER\n\n#include \"node.h\"\n");
  }

  #[test]
  fn test_leading_blank_lines_before_header_consumed() {
    let with_blanks = format!("\n\n  \n{OLD_HEADER}CODE\n");
    let without = format!("{OLD_HEADER}CODE\n");
    assert_eq!(rewrite(&with_blanks), rewrite(&without));
    assert_eq!(rewrite(&without), "HEADER\n\nCODE\n");
  }

  #[test]
  fn test_leading_blank_lines_dropped_without_header() {
    assert_eq!(rewrite("\n\nint x;\n"), "HEADER\n\nint x;\n");
  }

  #[test]
  fn test_plain_comment_is_not_a_header() {
    let content = "/* Just a comment */\nint x;\n";
    assert_eq!(rewrite(content), format!("HEADER\n\n{content}"));
  }

  #[test]
  fn test_comment_right_after_header_is_consumed() {
    let content = format!("{OLD_HEADER}/* trailing note */\nint x;\n");
    assert_eq!(rewrite(&content), "HEADER\n\nint x;\n");
  }

  #[test]
  fn test_header_only_file() {
    assert_eq!(rewrite(OLD_HEADER), "HEADER\n\n");
  }

  #[test]
  fn test_empty_and_blank_files() {
    assert_eq!(rewrite(""), "HEADER\n\n");
    assert_eq!(rewrite("\n \n\t\n"), "HEADER\n\n");
  }

  #[test]
  fn test_missing_trailing_newline_is_added() {
    assert_eq!(rewrite("int x;"), "HEADER\n\nint x;\n");
  }

  #[test]
  fn test_trailing_blank_lines_kept() {
    assert_eq!(rewrite("int x;\n\n\n"), "HEADER\n\nint x;\n\n\n");
  }

  #[test]
  fn test_crlf_normalized_by_default() {
    let content = "/**********/\r\n/* old */\r\n\r\nint x;\r\nint y;\r\n";
    assert_eq!(rewrite(content), "HEADER\n\nint x;\nint y;\n");
  }

  #[test]
  fn test_crlf_preserved_on_request() {
    let transformer = ContentTransformer::new(LineEndings::Preserve);
    let content = "int x;\r\nint y;\r\n";
    assert_eq!(transformer.rewrite(content, "HEADER\n\n"), "HEADER\r\n\r\nint x;\r\nint y;\r\n");
  }

  #[test]
  fn test_preserve_leaves_lf_files_alone() {
    let transformer = ContentTransformer::new(LineEndings::Preserve);
    assert_eq!(transformer.rewrite("int x;\n", "HEADER\n\n"), "HEADER\n\nint x;\n");
  }

  #[test]
  fn test_normalize_line_endings() {
    assert!(matches!(normalize_line_endings("a\nb\n"), Cow::Borrowed(_)));
    assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
  }

  #[test]
  fn test_strip_old_header_returns_remaining_lines() {
    let content = format!("\n{OLD_HEADER}\nint x;\nint y;");
    assert_eq!(strip_old_header(&content), vec!["int x;", "int y;"]);
  }
}
