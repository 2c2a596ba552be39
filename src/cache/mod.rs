// src/cache/mod.rs

use glob::glob;
use std::{
    fs,
    io,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::DrawError;

/// Outcome of a cleanup pass over stale cache files.
#[derive(Debug, Default)]
pub struct CleanupReport {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, io::Error)>,
}

/// Pick the cache files that do not belong to the month `tag`.
/// Only the file name is inspected, never the directory part.
pub fn stale_files<P: AsRef<Path>>(existing: &[P], tag: &str) -> Vec<PathBuf> {
    let mut stale = Vec::new();
    for p in existing {
        let path = <P as AsRef<Path>>::as_ref(p);
        if let Some(name) = path.file_name() {
            if !name.to_string_lossy().contains(tag) {
                stale.push(path.to_path_buf());
            }
        }
    }
    stale
}

/// List every cache file in `cfg.cache_dir`, whatever its month.
pub fn list_cache_files(cfg: &Config) -> Result<Vec<PathBuf>, DrawError> {
    let pattern = cfg.cache_glob();
    let entries = glob(&pattern).map_err(|source| DrawError::CacheScan {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("skipping unreadable cache entry: {}", e),
        }
    }
    files.sort();
    Ok(files)
}

/// Delete `paths`, logging failures instead of aborting.
pub fn remove_files(paths: &[PathBuf]) -> CleanupReport {
    let mut report = CleanupReport::default();
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => {
                info!(path=%path.display(), "removed stale cache file");
                report.removed.push(path.clone());
            }
            Err(e) => {
                warn!(path=%path.display(), "failed to remove stale cache file: {}", e);
                report.failed.push((path.clone(), e));
            }
        }
    }
    report
}

/// Remove every cache file that does not belong to the month `tag`.
pub fn cleanup_stale(cfg: &Config, tag: &str) -> Result<CleanupReport, DrawError> {
    let existing = list_cache_files(cfg)?;
    let stale = stale_files(&existing, tag);
    Ok(remove_files(&stale))
}
