//! Output Module
//!
//! Persists retrieved payloads to disk without overwriting existing files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Find a path that does not collide with an existing file
///
/// If `path` is taken, inserts an incrementing counter before the extension
/// until a free name is found: `out.txt` -> `out(1).txt` -> `out(2).txt`.
pub fn unique_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let ext = path.extension().and_then(|s| s.to_str());

    let mut i = 1;
    loop {
        let candidate_name = match ext {
            Some(ext) => format!("{}({}).{}", stem, i, ext),
            None => format!("{}({})", stem, i),
        };
        let candidate = path.with_file_name(candidate_name);
        if !candidate.exists() {
            return candidate;
        }
        i += 1;
    }
}

/// Write a payload under `dir/name`, disambiguating on collision
///
/// The raw payload bytes go to disk; text rendering for display is a
/// separate concern and never feeds this path. Returns the path actually
/// written, which may carry a `(n)` counter.
pub fn write_payload(dir: &Path, name: &str, payload: &[u8]) -> Result<PathBuf> {
    let target = unique_path(&dir.join(name));
    fs::write(&target, payload)?;

    tracing::info!("Wrote {} bytes to {}", payload.len(), target.display());
    Ok(target)
}
