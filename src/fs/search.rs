use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Lazy depth-first walk yielding every entry whose name contains the query,
/// ignoring case.
///
/// Every directory is descended into whether or not it matched, including
/// directories reached through symbolic links. A link back to one of its own
/// ancestors is reported by the walker and not entered, which keeps link
/// cycles finite.
pub struct Search {
    needle: String,
    walker: walkdir::IntoIter,
    skipped: usize,
}

pub fn search(query: &str, root: &Path) -> Search {
    Search {
        needle: query.to_lowercase(),
        walker: WalkDir::new(root).min_depth(1).follow_links(true).into_iter(),
        skipped: 0,
    }
}

impl Search {
    /// Entries that could not be read and were left out.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn matches(&self, entry: &walkdir::DirEntry) -> bool {
        entry
            .file_name()
            .to_string_lossy()
            .to_lowercase()
            .contains(&self.needle)
    }
}

impl Iterator for Search {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            match self.walker.next()? {
                Ok(entry) if self.matches(&entry) => return Some(entry.into_path()),
                Ok(_) => {}
                Err(error) if error.loop_ancestor().is_some() => {
                    debug!(%error, "link cycle, not descending");
                }
                Err(error) => {
                    debug!(%error, "skipping unreadable entry");
                    self.skipped += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;

    fn names(found: impl Iterator<Item = PathBuf>, root: &Path) -> BTreeSet<String> {
        found
            .filter_map(|p| {
                p.strip_prefix(root)
                    .ok()
                    .map(|rel| rel.to_string_lossy().replace('\\', "/"))
            })
            .collect()
    }

    #[test]
    fn test_case_insensitive_substring() -> std::io::Result<()> {
        let temp = tempfile::tempdir()?;
        let root = temp.path();
        for name in ["app.LOG", "Logger.txt", "readme.md"] {
            fs::write(root.join(name), b"")?;
        }

        let found = names(search("log", root), root);
        assert_eq!(
            found,
            BTreeSet::from(["Logger.txt".to_string(), "app.LOG".to_string()])
        );
        Ok(())
    }

    #[test]
    fn test_matching_directories_are_descended() -> std::io::Result<()> {
        let temp = tempfile::tempdir()?;
        let root = temp.path();
        fs::create_dir_all(root.join("Logs").join("old"))?;
        fs::create_dir(root.join("src"))?;
        fs::write(root.join("Logs").join("old").join("boot.log"), b"")?;
        fs::write(root.join("Logs").join("notes.txt"), b"")?;
        fs::write(root.join("src").join("logging.rs"), b"")?;

        let found = names(search("LOG", root), root);
        assert_eq!(
            found,
            BTreeSet::from([
                "Logs".to_string(),
                "Logs/old/boot.log".to_string(),
                "src/logging.rs".to_string(),
            ])
        );
        Ok(())
    }

    #[test]
    fn test_parent_yielded_before_children() -> std::io::Result<()> {
        let temp = tempfile::tempdir()?;
        let root = temp.path();
        fs::create_dir_all(root.join("match").join("match"))?;

        let found: Vec<PathBuf> = search("match", root).collect();
        assert_eq!(
            found,
            vec![root.join("match"), root.join("match").join("match")]
        );
        Ok(())
    }

    #[test]
    fn test_unreadable_root_yields_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut found = search("x", &temp.path().join("missing"));
        assert!(found.next().is_none());
        assert_eq!(found.skipped(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_link_cycle_terminates() -> std::io::Result<()> {
        let temp = tempfile::tempdir()?;
        let root = temp.path();
        fs::create_dir(root.join("sub"))?;
        fs::write(root.join("sub").join("target.txt"), b"")?;
        std::os::unix::fs::symlink(root, root.join("sub").join("back"))?;

        let found = names(search("t", root), root);
        assert_eq!(found, BTreeSet::from(["sub/target.txt".to_string()]));
        Ok(())
    }
}
