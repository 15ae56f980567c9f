use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// One path that could not be copied or removed during a tree operation.
#[derive(Debug)]
pub struct EntryFailure {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl EntryFailure {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for EntryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

/// Counts of what a tree operation actually did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeReport {
    pub files: u64,
    pub dirs: u64,
    pub links: u64,
}

impl TreeReport {
    pub fn total(&self) -> u64 {
        self.files + self.dirs + self.links
    }
}

impl fmt::Display for TreeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "files={} dirs={} links={}",
            self.files, self.dirs, self.links
        )
    }
}

#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("already at root directory")]
    AtRoot,
    #[error("invalid path {}: {source}", path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("cannot copy {} into itself ({})", origin.display(), destination.display())]
    DestinationInsideSource {
        origin: PathBuf,
        destination: PathBuf,
    },
    #[error("copy finished with {} failed entries ({report} done)", failures.len())]
    CopyFailed {
        report: TreeReport,
        failures: Vec<EntryFailure>,
    },
    #[error("delete finished with {} failed entries ({report} done)", failures.len())]
    DeleteFailed {
        report: TreeReport,
        failures: Vec<EntryFailure>,
    },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FsError::Io {
            path: path.into(),
            source,
        }
    }

    /// Per-entry failures carried by a partially failed tree operation.
    pub fn failures(&self) -> &[EntryFailure] {
        match self {
            FsError::CopyFailed { failures, .. } | FsError::DeleteFailed { failures, .. } => {
                failures
            }
            _ => &[],
        }
    }
}
