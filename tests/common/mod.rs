#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A Godot-era header block as found at the top of files before the rewrite.
pub const GODOT_HEADER: &str = "\
/**************************************************************************/
/*  node.cpp                                                              */
/**************************************************************************/
/*                         This file is part of:                          */
/*                             GODOT ENGINE                               */
/*                        https://godotengine.org                         */
/**************************************************************************/
/* Copyright (c) 2014-present Godot Engine contributors (see AUTHORS.md). */
/* Copyright (c) 2007-2014 Juan Linietsky, Ariel Manzur.                  */
/**************************************************************************/
";

/// A typical source body following the header.
pub const BODY: &str = "#include \"node.h\"\n\n#include \"core/config/project_settings.h\"\n\nvoid Node::_notification(int p_notification) {\n}\n";

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
  let path = dir.join(name);
  fs::write(&path, content).with_context(|| format!("Failed to write fixture {}", path.display()))?;
  Ok(path)
}

/// Path as the string form the processor and binary take.
pub fn arg(path: &Path) -> String {
  path.to_string_lossy().to_string()
}

/// The filename line (second line) of rewritten content.
pub fn filename_line(content: &str) -> &str {
  content.lines().nth(1).unwrap_or_default()
}

/// Marks `path` read-only and reports whether writes to it are now refused.
///
/// Privileged users (root in most containers) can still write read-only files,
/// so callers skip write-failure assertions when this returns `false`.
pub fn make_read_only(path: &Path) -> Result<bool> {
  let mut permissions = fs::metadata(path)?.permissions();
  permissions.set_readonly(true);
  fs::set_permissions(path, permissions)?;
  Ok(fs::OpenOptions::new().write(true).open(path).is_err())
}
