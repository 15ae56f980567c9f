//! Recursive bottom-up delete.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::error::{EntryFailure, FsError, TreeReport};

/// Delete `path` and, for a directory, everything beneath it.
///
/// Symbolic links are removed as links; their targets are never touched.
/// Every entry is attempted even after a failure. Failures are collected and
/// returned together as [`FsError::DeleteFailed`]; a directory that could
/// not be emptied shows up there as well.
pub fn delete_tree(path: &Path) -> Result<TreeReport, FsError> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FsError::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(FsError::io(path, e)),
    };

    let mut report = TreeReport::default();
    let mut failures = Vec::new();

    if meta.is_dir() {
        delete_dir_tree(path, &mut report, &mut failures);
    } else {
        delete_entry(path, meta.file_type().is_symlink(), &mut report, &mut failures);
    }

    debug!(path = %path.display(), %report, failed = failures.len(), "delete finished");
    if failures.is_empty() {
        Ok(report)
    } else {
        Err(FsError::DeleteFailed { report, failures })
    }
}

fn delete_dir_tree(root: &Path, report: &mut TreeReport, failures: &mut Vec<EntryFailure>) {
    // Listing errors wait for their directory: reported if it then cannot be
    // removed, dropped if it can, so each path fails at most once.
    let mut unlisted: BTreeMap<PathBuf, io::Error> = BTreeMap::new();

    for next in WalkDir::new(root).contents_first(true) {
        let entry = match next {
            Ok(entry) => entry,
            Err(error) => {
                let path = error.path().unwrap_or(root).to_path_buf();
                unlisted.insert(path, io::Error::from(error));
                continue;
            }
        };

        let path = entry.path();
        let file_type = entry.file_type();
        if !file_type.is_dir() {
            delete_entry(path, file_type.is_symlink(), report, failures);
            continue;
        }

        match fs::remove_dir(path) {
            Ok(()) => {
                debug!(path = %path.display(), "removed directory");
                report.dirs += 1;
                unlisted.remove(path);
            }
            Err(e) => {
                let error = unlisted.remove(path).unwrap_or(e);
                record(failures, path, error);
            }
        }
    }

    for (path, error) in unlisted {
        record(failures, &path, error);
    }
}

fn delete_entry(
    path: &Path,
    is_symlink: bool,
    report: &mut TreeReport,
    failures: &mut Vec<EntryFailure>,
) {
    match remove_non_dir(path, is_symlink) {
        Ok(()) => {
            debug!(path = %path.display(), "removed entry");
            if is_symlink {
                report.links += 1;
            } else {
                report.files += 1;
            }
        }
        Err(e) => record(failures, path, e),
    }
}

#[cfg(windows)]
fn remove_non_dir(path: &Path, is_symlink: bool) -> io::Result<()> {
    // Directory links on Windows are removed like directories.
    if is_symlink && fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false) {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(not(windows))]
fn remove_non_dir(path: &Path, _is_symlink: bool) -> io::Result<()> {
    fs::remove_file(path)
}

fn record(failures: &mut Vec<EntryFailure>, path: &Path, error: io::Error) {
    warn!(path = %path.display(), %error, "delete failed for entry");
    failures.push(EntryFailure::new(path, error));
}
