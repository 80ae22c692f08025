//! # Header Detection Module
//!
//! This module contains the check that decides whether a file already carries
//! the current header. It sits behind a trait so the processor can be given a
//! different detector without changing the rewrite logic.

use crate::header::{PRODUCT_MARKER, PROJECT_URL_MARKER};

/// Trait for current-header detectors.
///
/// Implementations decide, from the full file content, whether the file must
/// be left untouched because it already has the current header.
pub trait HeaderDetector: Send + Sync {
  /// Returns `true` if `content` already carries the current header.
  fn has_current_header(&self, content: &str) -> bool;
}

/// Default detector.
///
/// A file counts as current when both the product name and the canonical
/// project URL appear anywhere in its content. The markers are not required to
/// sit inside a header-shaped block, so a body mentioning both also counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkerDetector;

impl MarkerDetector {
  pub const fn new() -> Self {
    Self
  }
}

impl HeaderDetector for MarkerDetector {
  fn has_current_header(&self, content: &str) -> bool {
    content.contains(PRODUCT_MARKER) && content.contains(PROJECT_URL_MARKER)
  }
}
