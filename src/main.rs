//! # copyright-headers
//!
//! Rewrites the copyright header of the files given on the command line.

use anyhow::Result;
use copyright_headers::cli::{Cli, run_rewrite};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_rewrite(cli.args)
}
