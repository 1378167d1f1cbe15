//! Wallpaper pool retention.
//!
//! Before a new wallpaper is downloaded the destination directory is pruned
//! so that at most `keep` files remain.  `keep == 0` disables pruning
//! entirely.  Entries are ordered by modification time, newest first, with
//! the filename as a deterministic secondary key: among files sharing a
//! timestamp, lexicographically earlier names count as more recent.
//!
//! Pruning is best-effort.  A directory that cannot be listed, or a file
//! that cannot be removed, is logged and skipped — never an error for the
//! caller.

use log::{debug, warn};
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// A pool member considered for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PoolFile {
    name: OsString,
    modified: SystemTime,
}

/// Delete every file in `dir` beyond the `keep` most recent.
///
/// Subdirectories are ignored.  Returns the number of files removed.
pub fn prune(dir: &Path, keep: u32) -> usize {
    if keep == 0 {
        return 0;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("cannot list {} for pruning: {}", dir.display(), e);
            return 0;
        }
    };

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let meta = match entry.metadata() {
            Ok(meta) if meta.is_file() => meta,
            Ok(_) => continue,
            Err(e) => {
                warn!("cannot stat {}: {}", entry.path().display(), e);
                continue;
            }
        };
        files.push(PoolFile {
            name: entry.file_name(),
            modified: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        });
    }

    let mut removed = 0;
    for victim in surplus(files, keep as usize) {
        let path = dir.join(&victim.name);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("pruned {}", path.display());
                removed += 1;
            }
            Err(e) => warn!("cannot prune {}: {}", path.display(), e),
        }
    }
    removed
}

/// The files that exceed the keep-count, ordered for deletion.
///
/// Sorts newest-first (ties broken by ascending filename) and returns
/// everything past position `keep`.
fn surplus(mut files: Vec<PoolFile>, keep: usize) -> Vec<PoolFile> {
    if files.len() <= keep {
        return Vec::new();
    }
    files.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));
    files.split_off(keep)
}
