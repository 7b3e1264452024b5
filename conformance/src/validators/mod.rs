//! Conformance validators, one module per output kind.

pub mod documents;
pub mod manifest;
pub mod scripts;
pub mod table;
pub mod template;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Lists `case_*.<ext>` files in `dir` whose names are not in `expected`.
///
/// These are leftovers of an earlier, longer sweep.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed.
pub fn stray_case_files(dir: &Path, ext: &str, expected: &HashSet<String>) -> Result<Vec<String>> {
    let suffix = format!(".{ext}");
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list output directory: {}", dir.display()))?;
    let mut stray: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| name.starts_with("case_") && name.ends_with(&suffix))
        .filter(|name| !expected.contains(name))
        .collect();
    stray.sort();
    Ok(stray)
}

/// Returns the 1-based number of the first line where `a` and `b` differ.
#[must_use]
pub fn first_difference(a: &str, b: &str) -> Option<usize> {
    let mut left = a.split('\n');
    let mut right = b.split('\n');
    let mut line = 1;
    loop {
        match (left.next(), right.next()) {
            (None, None) => return None,
            (l, r) if l != r => return Some(line),
            _ => line += 1,
        }
    }
}
