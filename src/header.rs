//! # Header Module
//!
//! This module owns the standard copyright header and renders it for a given
//! file name.
//!
//! The header is a fixed-width `/* */` comment block. Its only variable slot is
//! the [`PLACEHOLDER`] token on the second line, which is replaced by the base
//! name of the file being rewritten while keeping the right border of the block
//! in the same column.
//!
//! ## Example
//!
//! ```rust
//! use copyright_headers::header::render_header;
//!
//! let header = render_header("main.cpp");
//! assert!(header.starts_with("/****"));
//! assert!(header.contains("/*  main.cpp "));
//! assert!(header.ends_with("*/\n\n"));
//! ```

/// Placeholder token standing in for the file name inside [`HEADER_TEMPLATE`].
pub const PLACEHOLDER: &str = "$filename";

/// Product name that marks a file as already carrying the current header.
pub const PRODUCT_MARKER: &str = "OCULUS ENGINE";

/// Canonical project URL that marks a file as already carrying the current
/// header.
pub const PROJECT_URL_MARKER: &str = "oculusengine.org";

/// Decorative border that opens a recognizable old-style header block.
pub const BORDER_MARKER: &str = "/**********";

/// Two-character comment opener every header line starts with.
pub const COMMENT_OPEN: &str = "/*";

/// The standard header block, terminated by a line feed.
pub const HEADER_TEMPLATE: &str = r#"/**************************************************************************/
/*  $filename                                                             */
/**************************************************************************/
/*                         This file is part of:                          */
/*                             OCULUS ENGINE                             */
/*                        https://oculusengine.org                        */
/**************************************************************************/
/* Copyright (c) 2025-present Oculus Engine contributors (see AUTHORS.md). */
/*                                                                        */
/* This file was originally derived from Godot Engine:                   */
/* https://github.com/godotengine/godot/tree/63227bbc8ae5300319f14f8253c8158b846f355b */
/*                                                                        */
/* Original Godot Engine copyright:                                      */
/* Copyright (c) 2014-present Godot Engine contributors (see AUTHORS.md). */
/* Copyright (c) 2007-2014 Juan Linietsky, Ariel Manzur.                  */
/*                                                                        */
/* Permission is hereby granted, free of charge, to any person obtaining  */
/* a copy of this software and associated documentation files (the        */
/* "Software"), to deal in the Software without restriction, including    */
/* without limitation the rights to use, copy, modify, merge, publish,    */
/* distribute, sublicense, and/or sell copies of the Software, and to     */
/* permit persons to whom the Software is furnished to do so, subject to  */
/* the following conditions:                                              */
/*                                                                        */
/* The above copyright notice and this permission notice shall be         */
/* included in all copies or substantial portions of the Software.        */
/*                                                                        */
/* THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,        */
/* EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF     */
/* MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. */
/* IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY   */
/* CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,  */
/* TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE      */
/* SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.                 */
/**************************************************************************/
"#;

/// Right-pads `s` with spaces until it is `width` characters long.
///
/// Width is counted in characters rather than bytes so that multi-byte file
/// names line up visually. Strings already at or beyond `width` are returned
/// unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
  let len = s.chars().count();
  let mut padded = String::with_capacity(s.len() + width.saturating_sub(len));
  padded.push_str(s);
  padded.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
  padded
}

/// Renders the standard header for `file_name`, followed by one blank line.
///
/// The shorter of the file name and [`PLACEHOLDER`] is padded with spaces to the
/// length of the longer one, so the substitution eats (or leaves) exactly the
/// spaces needed to keep the closing `*/` where the template put it. Names too
/// long to fit in the available padding fall back to a plain substitution and
/// push the border outward.
///
/// # Parameters
///
/// * `file_name` - Base name of the file the header is rendered for
pub fn render_header(file_name: &str) -> String {
  let name_len = file_name.chars().count();
  let placeholder_len = PLACEHOLDER.chars().count();

  let target = pad_right(PLACEHOLDER, name_len);
  let replacement = pad_right(file_name, placeholder_len);

  let mut text = if HEADER_TEMPLATE.contains(&target) {
    HEADER_TEMPLATE.replace(&target, &replacement)
  } else {
    HEADER_TEMPLATE.replace(PLACEHOLDER, file_name)
  };
  text.push('\n');
  text
}

#[cfg(test)]
mod tests {
  use super::*;

  fn filename_line(header: &str) -> &str {
    header.lines().nth(1).expect("header has a filename line")
  }

  #[test]
  fn test_template_shape() {
    let first = HEADER_TEMPLATE.lines().next().unwrap();
    assert!(first.starts_with(BORDER_MARKER));
    assert!(HEADER_TEMPLATE.ends_with("*/\n"));
    assert!(HEADER_TEMPLATE.contains(PRODUCT_MARKER));
    assert!(HEADER_TEMPLATE.contains(PROJECT_URL_MARKER));
    assert_eq!(HEADER_TEMPLATE.matches(PLACEHOLDER).count(), 1);
    assert!(HEADER_TEMPLATE.lines().all(|line| line.starts_with(COMMENT_OPEN)));
  }

  #[test]
  fn test_pad_right() {
    assert_eq!(pad_right("ab", 5), "ab   ");
    assert_eq!(pad_right("abcdef", 3), "abcdef");
    assert_eq!(pad_right("", 2), "  ");
    assert_eq!(pad_right("é", 3), "é  ");
  }

  #[test]
  fn test_render_short_name() {
    let header = render_header("a.h");
    assert_eq!(
      filename_line(&header),
      "/*  a.h                                                                   */"
    );
  }

  #[test]
  fn test_render_keeps_border_column() {
    let expected = filename_line(HEADER_TEMPLATE).chars().count();
    for name in ["x.c", "node_2d.h", "editor_node_scene_management.cpp"] {
      let header = render_header(name);
      let line = filename_line(&header);
      assert_eq!(line.chars().count(), expected, "border moved for {name}");
      assert!(line.ends_with("*/"));
      assert!(line.starts_with(&format!("/*  {name}")));
    }
  }

  #[test]
  fn test_render_multibyte_name_keeps_border_column() {
    let header = render_header("größere_knoten.cpp");
    assert_eq!(
      filename_line(&header).chars().count(),
      filename_line(HEADER_TEMPLATE).chars().count()
    );
  }

  #[test]
  fn test_render_overlong_name_falls_back() {
    let name = format!("{}.cpp", "n".repeat(80));
    let header = render_header(&name);
    assert_eq!(filename_line(&header), format!("/*  {name}{}*/", " ".repeat(61)));
  }

  #[test]
  fn test_render_appends_blank_line() {
    let header = render_header("a.cpp");
    assert_eq!(header.len(), HEADER_TEMPLATE.len() + 1);
    assert!(header.ends_with("*/\n\n"));
    assert!(!header.contains(PLACEHOLDER));
  }
}
