use std::path::{Path, PathBuf};

use tracing::info;

use super::{display_name, two_args, Command, CommandContext, CommandError};
use crate::fs::{copy_tree, next_available_name, FileEntry};

const USAGE: &str = "copy <source> <dest>";

#[derive(Clone, Default)]
pub struct CopyCommand;

impl CopyCommand {
    pub fn new() -> Self {
        Self
    }
}

/// Work out where a copy of `source` aimed at `dest` really lands.
///
/// An existing directory receives the source under its own name, and a copy
/// that would land on an existing sibling of the source gets a numbered name
/// instead of overwriting it.
fn final_destination(source: &Path, dest: PathBuf) -> PathBuf {
    let dest = match source.file_name() {
        Some(name) if dest.is_dir() => dest.join(name),
        _ => dest,
    };

    let taken = dest.symlink_metadata().is_ok();
    if taken && dest.parent() == source.parent() {
        next_available_name(&dest, !source.is_dir())
    } else {
        dest
    }
}

impl Command for CopyCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let (src, dst) = two_args(args, USAGE)?;
        let source = ctx.session.resolve_existing(src)?;
        let dest = final_destination(&source, ctx.session.resolve(dst)?);

        let report = copy_tree(&source, &dest)?;
        info!(source = %source.display(), dest = %dest.display(), %report, "copied");

        let kind = FileEntry::read(&source)?.kind();
        writeln!(ctx.out, "{kind} copied to: {}", display_name(&dest))?;
        Ok(())
    }

    fn usage(&self) -> &'static str {
        USAGE
    }
}
