//! Crash-safe file writes for the document store
//!
//! Content goes to a `.tmp` sibling, is synced, then renamed over the target,
//! so the JSONL file is always either the old or the new version.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::StoreResult;

/// Replace `path` with the lines written by `write_fn`
pub fn atomic_write_with<F>(path: &Path, write_fn: F) -> StoreResult<()>
where
    F: FnOnce(&mut File) -> StoreResult<()>,
{
    let temp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(&temp_path)?;
    if let Err(e) = write_fn(&mut file).and_then(|()| Ok(file.sync_all()?)) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Append one line and fsync
pub fn append_line(path: &Path, line: &str) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)?;
    file.sync_all()?;
    Ok(())
}
