use std::fs;

use chrono::{DateTime, Local};

use super::{single_arg, Command, CommandContext, CommandError};
use crate::fs::FileEntry;

#[derive(Clone, Default)]
pub struct InfoCommand;

impl InfoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for InfoCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let spec = single_arg(args, self.usage())?;
        let path = ctx.session.resolve_existing(&spec)?;
        let entry = FileEntry::read(&path)?;

        let modified = entry
            .modified
            .map(|time| {
                DateTime::<Local>::from(time)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            })
            .unwrap_or_else(|| "unknown".to_string());

        writeln!(ctx.out, "Name: {}", entry.name)?;
        writeln!(ctx.out, "Path: {}", entry.path.display())?;
        writeln!(ctx.out, "Size: {} bytes", entry.size)?;
        writeln!(ctx.out, "Last Modified: {modified}")?;
        writeln!(ctx.out, "Type: {}", entry.kind())?;
        if entry.is_symlink {
            if let Ok(target) = fs::read_link(&entry.path) {
                writeln!(ctx.out, "Link Target: {}", target.display())?;
            }
        }
        Ok(())
    }

    fn usage(&self) -> &'static str {
        "info <file|dir>"
    }
}
