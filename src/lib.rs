//! # copyright-headers
//!
//! A tool that rewrites the copyright header at the top of source files.
//!
//! Every file named on the command line gets the standard header block, with
//! its own base name filled into the filename line. An old-style header (a
//! leading `/**********` block) is replaced, the rest of the file is kept as
//! is, and files that already carry the current header are left untouched, so
//! running the tool twice changes nothing the second time.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use copyright_headers::processor::{Processor, ProcessorConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let processor = Processor::new(ProcessorConfig {
//!         check_only: true,
//!         ..Default::default()
//!     });
//!
//!     let result = processor.process(&["core/object.cpp".to_string()])?;
//!     for report in &result.reports {
//!         println!("{}: {:?}", report.path.display(), report.action);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`header`] - The header template and filename substitution
//! * [`detection`] - Detection of files that already carry the current header
//! * [`processor`] - Reading, rewriting and writing files
//! * [`diff`] - Diffs of rewrites
//! * [`report`] - Per-file outcomes and JSON reports
//! * [`logging`] - Output modes and tracing setup

pub mod cli;
pub mod detection;
pub mod diff;
pub mod header;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
