// File I/O Operations
// Snapshot reads and whole-file replacement for files shared with another process

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Read a whole file as text, replacing invalid UTF-8 sequences.
///
/// The other side of a shared file may be halfway through rewriting it, so
/// callers must treat the result as a snapshot that can be truncated.
pub fn read_text_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Replace the contents of `path` in one step.
///
/// The data is written to a sibling staging file which is then renamed over
/// the target, so a concurrent reader sees either the old or the new contents.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let staging = staging_path(path);
    fs::write(&staging, contents)?;
    if let Err(err) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(err);
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.staging", std::process::id()));
    path.with_file_name(name)
}
