//! Recursive, structure-preserving copy.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::error::{EntryFailure, FsError, TreeReport};

struct CopyRun {
    report: TreeReport,
    failures: Vec<EntryFailure>,
}

impl CopyRun {
    fn new() -> Self {
        Self {
            report: TreeReport::default(),
            failures: Vec::new(),
        }
    }

    fn fail(&mut self, path: &Path, error: io::Error) {
        warn!(path = %path.display(), %error, "copy failed for entry");
        self.failures.push(EntryFailure::new(path, error));
    }

    fn finish(self) -> Result<TreeReport, FsError> {
        if self.failures.is_empty() {
            Ok(self.report)
        } else {
            Err(FsError::CopyFailed {
                report: self.report,
                failures: self.failures,
            })
        }
    }
}

/// Copy `source` to `destination`.
///
/// Files overwrite an existing destination file. Directories are recreated
/// entry by entry, parents before children, merging into directories that
/// already exist. Symbolic links inside a tree are recreated as links.
/// Failures of individual entries do not stop the copy; they are collected
/// and returned together as [`FsError::CopyFailed`].
pub fn copy_tree(source: &Path, destination: &Path) -> Result<TreeReport, FsError> {
    let meta = match fs::symlink_metadata(source) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FsError::NotFound(source.to_path_buf()))
        }
        Err(e) => return Err(FsError::io(source, e)),
    };

    // Also catches copying a file onto itself, which would truncate it.
    if destination.starts_with(source) {
        return Err(FsError::DestinationInsideSource {
            origin: source.to_path_buf(),
            destination: destination.to_path_buf(),
        });
    }

    let mut run = CopyRun::new();
    let file_type = meta.file_type();

    if file_type.is_symlink() {
        copy_link(source, destination, &mut run);
    } else if file_type.is_dir() {
        copy_dir_tree(source, destination, &mut run);
    } else {
        copy_file(source, destination, &mut run);
    }

    debug!(source = %source.display(), destination = %destination.display(), report = %run.report, "copy finished");
    run.finish()
}

fn copy_dir_tree(source: &Path, destination: &Path, run: &mut CopyRun) {
    // Pre-order, so every directory exists before its children are placed.
    let mut walker = WalkDir::new(source).sort_by_file_name().into_iter();

    while let Some(next) = walker.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(error) => {
                let path = error.path().unwrap_or(source).to_path_buf();
                run.fail(&path, io::Error::from(error));
                continue;
            }
        };

        let dst_path = match entry.path().strip_prefix(source) {
            Ok(rel) if !rel.as_os_str().is_empty() => destination.join(rel),
            _ => destination.to_path_buf(),
        };

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            copy_link(entry.path(), &dst_path, run);
        } else if file_type.is_dir() {
            match ensure_dir(&dst_path) {
                Ok(()) => run.report.dirs += 1,
                Err(e) => {
                    // Nothing below this directory can be placed.
                    run.fail(&dst_path, e);
                    walker.skip_current_dir();
                }
            }
        } else {
            copy_file(entry.path(), &dst_path, run);
        }
    }
}

fn ensure_dir(path: &Path) -> io::Result<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(e),
    }
}

fn copy_file(source: &Path, destination: &Path, run: &mut CopyRun) {
    match fs::copy(source, destination) {
        Ok(bytes) => {
            debug!(source = %source.display(), destination = %destination.display(), bytes, "copied file");
            run.report.files += 1;
        }
        Err(e) => run.fail(source, e),
    }
}

fn copy_link(source: &Path, destination: &Path, run: &mut CopyRun) {
    let target = match fs::read_link(source) {
        Ok(target) => target,
        Err(e) => return run.fail(source, e),
    };

    if fs::symlink_metadata(destination).is_ok() {
        if let Err(e) = remove_for_replace(destination) {
            return run.fail(destination, e);
        }
    }

    match create_symlink(source, &target, destination) {
        Ok(()) => run.report.links += 1,
        Err(e) => run.fail(destination, e),
    }
}

fn remove_for_replace(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "a directory is in the way of the link",
        ));
    }
    fs::remove_file(path)
}

#[cfg(unix)]
fn create_symlink(_source: &Path, target: &Path, destination: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, destination)
}

#[cfg(windows)]
fn create_symlink(source: &Path, target: &Path, destination: &Path) -> io::Result<()> {
    use std::os::windows::fs::{symlink_dir, symlink_file};
    if source.is_dir() {
        symlink_dir(target, destination)
    } else {
        symlink_file(target, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn build_tree(root: &Path) -> io::Result<PathBuf> {
        let x = root.join("x");
        fs::create_dir_all(x.join("y"))?;
        fs::write(x.join("1.txt"), b"one")?;
        fs::write(x.join("y").join("2.txt"), b"two")?;
        Ok(x)
    }

    #[test]
    fn test_copy_single_file_overwrites() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let src = temp.path().join("src.txt");
        let dst = temp.path().join("dst.txt");
        fs::write(&src, b"new")?;
        fs::write(&dst, b"old contents")?;

        let report = copy_tree(&src, &dst)?;
        assert_eq!(report.files, 1);
        assert_eq!(fs::read(&dst)?, b"new");
        Ok(())
    }

    #[test]
    fn test_copy_tree_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let x = build_tree(temp.path())?;
        let dest = temp.path().join("copy");

        let report = copy_tree(&x, &dest)?;
        assert_eq!(report, TreeReport { files: 2, dirs: 2, links: 0 });
        assert_eq!(fs::read(dest.join("1.txt"))?, b"one");
        assert_eq!(fs::read(dest.join("y").join("2.txt"))?, b"two");
        Ok(())
    }

    #[test]
    fn test_copy_twice_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let x = build_tree(temp.path())?;
        let dest = temp.path().join("copy");

        let first = copy_tree(&x, &dest)?;
        let second = copy_tree(&x, &dest)?;
        assert_eq!(first, second);

        let mut names: Vec<_> = fs::read_dir(&dest)?
            .map(|e| e.map(|e| e.file_name()))
            .collect::<io::Result<_>>()?;
        names.sort();
        assert_eq!(names, vec!["1.txt", "y"]);
        assert_eq!(fs::read(dest.join("y").join("2.txt"))?, b"two");
        Ok(())
    }

    #[test]
    fn test_copy_into_itself_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let x = build_tree(temp.path())?;

        let result = copy_tree(&x, &x.join("y").join("inner"));
        assert!(matches!(result, Err(FsError::DestinationInsideSource { .. })));
        assert!(!x.join("y").join("inner").exists());
        Ok(())
    }

    #[test]
    fn test_missing_source() {
        let result = copy_tree(Path::new("/definitely/not/here"), Path::new("/tmp/never"));
        assert!(matches!(result, Err(FsError::NotFound(_))));
    }

    #[test]
    fn test_failed_entries_are_collected() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let x = build_tree(temp.path())?;
        let dest = temp.path().join("copy");
        // A file where the subdirectory should go blocks the whole subtree.
        fs::create_dir(&dest)?;
        fs::write(dest.join("y"), b"in the way")?;

        match copy_tree(&x, &dest) {
            Err(FsError::CopyFailed { report, failures }) => {
                assert_eq!(report.files, 1);
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].path, dest.join("y"));
            }
            other => panic!("expected CopyFailed, got {other:?}"),
        }
        assert_eq!(fs::read(dest.join("1.txt"))?, b"one");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_links_are_recreated_not_followed() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let x = build_tree(temp.path())?;
        // Points back at its own ancestor; following it would never end.
        std::os::unix::fs::symlink(&x, x.join("y").join("loop"))?;
        let dest = temp.path().join("copy");

        let report = copy_tree(&x, &dest)?;
        assert_eq!(report.links, 1);
        let copied = dest.join("y").join("loop");
        assert!(fs::symlink_metadata(&copied)?.file_type().is_symlink());
        assert_eq!(fs::read_link(&copied)?, x);
        Ok(())
    }
}
