use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::PathExpander;
use crate::fs::FsError;

/// Resolve `spec` against `working_dir` into an absolute canonical path.
///
/// The target does not have to exist: the longest existing prefix is
/// canonicalized through the filesystem and the rest is collapsed lexically,
/// so the result is usable as a create target.
pub fn resolve(spec: &str, working_dir: &Path) -> Result<PathBuf, FsError> {
    if let Some(fixed) = fixed_spec(spec, working_dir)? {
        return Ok(fixed);
    }

    let resolved = canonicalize_lenient(&absolute(spec, working_dir)?)?;
    debug!(spec, resolved = %resolved.display(), "resolved path");
    Ok(resolved)
}

/// Like [`resolve`], but a symbolic link in the final component is kept
/// as the link instead of being replaced by its target.
fn resolve_entry(spec: &str, working_dir: &Path) -> Result<PathBuf, FsError> {
    if let Some(fixed) = fixed_spec(spec, working_dir)? {
        return Ok(fixed);
    }

    let joined = absolute(spec, working_dir)?;
    let resolved = match (joined.parent(), joined.file_name()) {
        (Some(parent), Some(name)) => canonicalize_lenient(parent)?.join(name),
        _ => canonicalize_lenient(&joined)?,
    };
    debug!(spec, resolved = %resolved.display(), "resolved entry");
    Ok(resolved)
}

/// Resolve `spec` and require an existing directory.
pub fn resolve_directory(spec: &str, working_dir: &Path) -> Result<PathBuf, FsError> {
    let path = resolve(spec, working_dir)?;
    match fs::metadata(&path) {
        Ok(meta) if meta.is_dir() => Ok(path),
        Ok(_) => Err(FsError::NotADirectory(path)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FsError::NotFound(path)),
        Err(e) => Err(FsError::io(path, e)),
    }
}

/// Resolve `spec` and require that something exists there.
///
/// The entry itself is returned: a symbolic link stays a link, and a
/// dangling one counts as existing.
pub fn resolve_existing(spec: &str, working_dir: &Path) -> Result<PathBuf, FsError> {
    let path = resolve_entry(spec, working_dir)?;
    match fs::symlink_metadata(&path) {
        Ok(_) => Ok(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FsError::NotFound(path)),
        Err(e) => Err(FsError::io(path, e)),
    }
}

/// `""`, `"."` and the parent spellings, which never touch the filesystem.
fn fixed_spec(spec: &str, working_dir: &Path) -> Result<Option<PathBuf>, FsError> {
    if spec.is_empty() || spec == "." {
        return Ok(Some(working_dir.to_path_buf()));
    }
    if matches!(spec, ".." | "../" | "..\\") {
        return working_dir
            .parent()
            .map(|parent| Some(parent.to_path_buf()))
            .ok_or(FsError::AtRoot);
    }
    Ok(None)
}

fn absolute(spec: &str, working_dir: &Path) -> Result<PathBuf, FsError> {
    let expanded = PathExpander::new().expand(spec)?;
    Ok(if expanded.is_absolute() {
        expanded
    } else {
        working_dir.join(expanded)
    })
}

fn canonicalize_lenient(path: &Path) -> Result<PathBuf, FsError> {
    let components: Vec<Component<'_>> = path.components().collect();
    let mut existing = components.len();

    loop {
        let prefix: PathBuf = components[..existing].iter().collect();
        match fs::canonicalize(&prefix) {
            Ok(mut base) => {
                for component in &components[existing..] {
                    match component {
                        Component::CurDir => {}
                        Component::ParentDir => {
                            base.pop();
                        }
                        other => base.push(other.as_os_str()),
                    }
                }
                return Ok(base);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && existing > 1 => existing -= 1,
            Err(source) => {
                return Err(FsError::InvalidPath {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}
