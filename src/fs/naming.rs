use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Find a free sibling of `candidate` named `base (k)ext`, counting k from 1.
///
/// Files split their name at the last `.`; directories keep the whole name as
/// the base. The counter is unbounded, so this loops for as long as the
/// parent keeps every numbered name taken.
pub fn next_available_name(candidate: &Path, is_file: bool) -> PathBuf {
    let name = candidate
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parent = candidate.parent().unwrap_or(Path::new(""));

    let (base, extension) = if is_file {
        split_extension(&name)
    } else {
        (name.as_str(), "")
    };

    let mut count: u64 = 1;
    loop {
        let mut numbered = OsString::from(base);
        numbered.push(format!(" ({count})"));
        numbered.push(extension);

        let path = parent.join(numbered);
        if !exists(&path) {
            return path;
        }
        count += 1;
    }
}

fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) => name.split_at(dot),
        None => (name, ""),
    }
}

// Dangling links still occupy the name.
fn exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}
