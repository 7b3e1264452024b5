//! Output buffers and file writing.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Line buffer for a generated shell script.
///
/// Starts with the `bash` shebang; every line ends in `\n`.
pub struct ScriptFile {
    /// Accumulated script text.
    pub buf: String,
}

impl ScriptFile {
    /// Creates a buffer holding only the shebang line.
    #[must_use]
    pub fn new() -> Self {
        let mut buf = String::with_capacity(512);
        buf.push_str("#!/bin/bash\n");
        Self { buf }
    }

    /// Appends one line.
    pub fn line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Returns the finished script.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

impl Default for ScriptFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
#[must_use]
pub fn normalize_line_endings(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Writes `content` verbatim, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}

/// Writes a shell script with `\n` line endings and marks it executable.
///
/// # Errors
///
/// Returns an error if the file cannot be written or its permissions set.
pub fn write_script(path: &Path, content: &str) -> Result<()> {
    write_file(path, &normalize_line_endings(content))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("Failed to mark executable: {}", path.display()))?;
    }
    Ok(())
}
