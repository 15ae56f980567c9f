//! Single-entry operations used by the shell commands.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{copy_tree, delete_tree, FileEntry, FsError};

/// Entries of `dir`, directories and files alike, sorted by name.
pub fn list_dir(dir: &Path) -> Result<Vec<FileEntry>, FsError> {
    let read = fs::read_dir(dir).map_err(|e| not_found_or_io(dir, e))?;

    let mut entries = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| FsError::io(dir, e))?;
        match FileEntry::read(&entry.path()) {
            Ok(info) => entries.push(info),
            // Vanished between read_dir and stat.
            Err(FsError::NotFound(_)) => continue,
            Err(e) => return Err(e),
        }
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Create an empty file; an existing entry is an error.
pub fn create_file(path: &Path) -> Result<(), FsError> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(drop)
        .map_err(|e| exists_or_io(path, e))
}

/// Create a single directory; the parent must exist.
pub fn create_dir(path: &Path) -> Result<(), FsError> {
    fs::create_dir(path).map_err(|e| exists_or_io(path, e))
}

/// Rename `from` to `to`, refusing to replace anything at `to`.
pub fn rename_entry(from: &Path, to: &Path) -> Result<(), FsError> {
    if fs::symlink_metadata(from).is_err() {
        return Err(FsError::NotFound(from.to_path_buf()));
    }
    if fs::symlink_metadata(to).is_ok() {
        return Err(FsError::AlreadyExists(to.to_path_buf()));
    }
    fs::rename(from, to).map_err(|e| FsError::io(from, e))
}

/// Move `from` to `to`, replacing an existing file at `to`.
///
/// When `to` is an existing directory the entry is moved into it. A rename
/// across filesystems falls back to copy followed by delete; any other
/// rename error is returned as is. Returns the final location.
pub fn move_entry(from: &Path, to: &Path) -> Result<PathBuf, FsError> {
    if fs::symlink_metadata(from).is_err() {
        return Err(FsError::NotFound(from.to_path_buf()));
    }

    let target = match from.file_name() {
        Some(name) if to.is_dir() => to.join(name),
        _ => to.to_path_buf(),
    };
    if target == from {
        return Ok(target);
    }

    match fs::rename(from, &target) {
        Ok(()) => {
            debug!(from = %from.display(), to = %target.display(), "renamed");
            Ok(target)
        }
        Err(error) if error.kind() == io::ErrorKind::CrossesDevices => {
            warn!(from = %from.display(), to = %target.display(), %error, "rename crosses filesystems, copying instead");
            copy_tree(from, &target)?;
            delete_tree(from)?;
            Ok(target)
        }
        Err(error) => Err(FsError::io(from, error)),
    }
}

/// Replace the contents of an existing file with `contents`.
pub fn write_contents(path: &Path, contents: &str) -> Result<(), FsError> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| not_found_or_io(path, e))?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| FsError::io(path, e))
}

fn not_found_or_io(path: &Path, e: io::Error) -> FsError {
    if e.kind() == io::ErrorKind::NotFound {
        FsError::NotFound(path.to_path_buf())
    } else {
        FsError::io(path, e)
    }
}

fn exists_or_io(path: &Path, e: io::Error) -> FsError {
    if e.kind() == io::ErrorKind::AlreadyExists {
        FsError::AlreadyExists(path.to_path_buf())
    } else {
        FsError::io(path, e)
    }
}
