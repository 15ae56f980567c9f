use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

use crate::path::PathExpander;

/// Completes file names relative to the session's working directory.
#[derive(Clone)]
pub struct PathCompleter {
    cwd: PathBuf,
    expander: PathExpander,
}

impl PathCompleter {
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            cwd,
            expander: PathExpander::new(),
        }
    }

    pub fn set_cwd(&mut self, cwd: &Path) {
        if self.cwd != cwd {
            self.cwd = cwd.to_path_buf();
        }
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (typed_dir, file_prefix) = split_incomplete(incomplete);
        let search_dir = self.search_dir(typed_dir);

        let Ok(entries) = fs::read_dir(&search_dir) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(file_prefix) {
                    return None;
                }
                let typed = format!("{typed_dir}{name}");
                Some(if entry.path().is_dir() {
                    Pair {
                        display: format!("{name}/"),
                        replacement: format!("{typed}/"),
                    }
                } else {
                    Pair {
                        display: name,
                        replacement: format!("{typed} "),
                    }
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }

    fn search_dir(&self, typed_dir: &str) -> PathBuf {
        if typed_dir.is_empty() {
            return self.cwd.clone();
        }
        let expanded = self
            .expander
            .expand(typed_dir)
            .unwrap_or_else(|_| PathBuf::from(typed_dir));
        if expanded.is_absolute() {
            expanded
        } else {
            self.cwd.join(expanded)
        }
    }
}

/// Split what was typed into the directory part (kept verbatim, with its
/// trailing separator) and the name prefix being completed.
fn split_incomplete(incomplete: &str) -> (&str, &str) {
    match incomplete.rfind(['/', std::path::MAIN_SEPARATOR]) {
        Some(idx) => incomplete.split_at(idx + 1),
        None => ("", incomplete),
    }
}
