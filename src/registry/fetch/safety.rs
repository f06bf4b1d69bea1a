//! Lexical path containment checks.
//!
//! Archive entry names and manifest paths are untrusted. Both are cleaned
//! here without touching the filesystem, so the containment guarantee does
//! not depend on how the archive library normalizes names.

use std::path::{Path, PathBuf};

use crate::error::{Result, SproutError};

/// Join `name` onto `root`, refusing anything that would not land strictly
/// inside `root`.
///
/// `name` is split on both `/` and `\`. Empty and `.` segments are skipped,
/// `..` pops the previous segment. Absolute names, drive prefixes, a `..`
/// that climbs past `root`, and names that clean down to `root` itself all
/// fail with [`SproutError::UnsafePath`].
pub fn resolve_entry_path(root: &Path, name: &str) -> Result<PathBuf> {
    let unsafe_path = || SproutError::UnsafePath {
        entry: name.to_string(),
    };

    if name.starts_with('/') || name.starts_with('\\') || has_drive_prefix(name) {
        return Err(unsafe_path());
    }

    let mut parts: Vec<&str> = Vec::new();
    for segment in name.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.pop().is_none() {
                    return Err(unsafe_path());
                }
            }
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return Err(unsafe_path());
    }

    let mut resolved = root.to_path_buf();
    resolved.extend(parts);
    Ok(resolved)
}

fn has_drive_prefix(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
