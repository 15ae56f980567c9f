use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::FsError;

/// Metadata of one filesystem entry, read fresh from disk.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl FileEntry {
    pub fn read(path: &Path) -> Result<Self, FsError> {
        let link_meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FsError::NotFound(path.to_path_buf()))
            }
            Err(e) => return Err(FsError::io(path, e)),
        };
        let is_symlink = link_meta.file_type().is_symlink();
        // Describe what a link points at; fall back to the link itself when dangling.
        let meta = if is_symlink {
            fs::metadata(path).unwrap_or(link_meta)
        } else {
            link_meta
        };

        Ok(Self {
            name: display_name(path),
            path: path.to_path_buf(),
            is_dir: meta.is_dir(),
            is_symlink,
            size: meta.len(),
            modified: meta.modified().ok(),
        })
    }

    pub fn kind(&self) -> &'static str {
        if self.is_symlink {
            "Link"
        } else if self.is_dir {
            "Directory"
        } else {
            "File"
        }
    }
}

/// Final component of `path` for messages, or the whole path when it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_file_entry() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let file = temp.path().join("data.bin");
        fs::write(&file, [0u8; 42])?;

        let entry = FileEntry::read(&file)?;
        assert_eq!(entry.name, "data.bin");
        assert_eq!(entry.size, 42);
        assert!(!entry.is_dir);
        assert_eq!(entry.kind(), "File");
        assert!(entry.modified.is_some());
        Ok(())
    }

    #[test]
    fn test_read_directory_entry() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let entry = FileEntry::read(temp.path())?;
        assert!(entry.is_dir);
        assert_eq!(entry.kind(), "Directory");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_link_entry_describes_target() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        std::os::unix::fs::symlink(temp.path(), temp.path().join("here"))?;

        let entry = FileEntry::read(&temp.path().join("here"))?;
        assert!(entry.is_symlink);
        assert!(entry.is_dir);
        assert_eq!(entry.kind(), "Link");
        Ok(())
    }

    #[test]
    fn test_missing_entry() {
        assert!(matches!(
            FileEntry::read(Path::new("/no/such/entry")),
            Err(FsError::NotFound(_))
        ));
    }
}
