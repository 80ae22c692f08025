//! # Logging Module
//!
//! copyright-headers writes to three channels:
//!
//! - **stdout**: results meant for people and scripts ([`info_log!`], the
//!   `output` module). Silenced by `-q`.
//! - **stderr, plain**: per-file progress with `-v` ([`verbose_log!`]) and
//!   per-file failures ([`report_file_error`]), which are always shown.
//! - **stderr, tracing**: structured diagnostics filtered by `RUST_LOG` or the
//!   `-q`/`-v` level, installed with [`init_tracing`].
//!
//! ## Example
//!
//! ```rust
//! use copyright_headers::logging::{ColorMode, set_verbose};
//! use copyright_headers::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! verbose_log!("Processing file: {}", "core/object.cpp");
//! info_log!("Generated JSON report at {}", "report.json");
//! ```

mod modes;

use std::fmt::Display;
use std::path::Path;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};
use tracing::error;

/// Prints per-file progress to stderr when `-v` was given.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Prints a highlighted status line to stdout unless `-q` was given.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Backing function of [`info_log!`].
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}

/// Reports a file that could not be processed.
///
/// The failure goes both to the tracing stream, so `RUST_LOG` filters and log
/// collectors see it, and to stderr as an `Error processing <path>: <cause>`
/// line, which quiet mode does not suppress.
pub fn report_file_error(path: &Path, err: &impl Display) {
  error!("Failed to process {}: {}", path.display(), err);
  eprintln!(
    "{} {}: {}",
    "Error processing".if_supports_color(Stream::Stderr, |s| s.red()),
    path.display(),
    err
  );
}
