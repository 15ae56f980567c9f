use std::path::Path;

use tracing::info;

use super::{display_name, single_arg, Command, CommandContext, CommandError};
use crate::core::state::Session;
use crate::fs::{delete_tree, FsError};

fn guard_working_dir(session: &Session, target: &Path) -> Result<(), CommandError> {
    if session.current_dir().starts_with(target) {
        return Err(CommandError::Refused(
            "cannot delete the working directory or one of its parents".to_string(),
        ));
    }
    Ok(())
}

fn remove(ctx: &mut CommandContext<'_>, target: &Path, label: &str) -> Result<(), CommandError> {
    guard_working_dir(ctx.session, target)?;
    let report = delete_tree(target)?;
    info!(path = %target.display(), %report, "deleted");
    writeln!(ctx.out, "{label}: {}", display_name(target))?;
    Ok(())
}

#[derive(Clone, Default)]
pub struct DelCommand;

impl DelCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for DelCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let spec = single_arg(args, self.usage())?;
        let target = ctx.session.resolve_existing(&spec)?;
        remove(ctx, &target, "Deleted")
    }

    fn usage(&self) -> &'static str {
        "del <file|dir>"
    }
}

#[derive(Clone, Default)]
pub struct RmdirCommand;

impl RmdirCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RmdirCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let spec = single_arg(args, self.usage())?;
        let target = ctx.session.resolve_existing(&spec)?;
        // A link to a directory is not a directory to remove.
        let is_dir = target.symlink_metadata().map(|m| m.is_dir()).unwrap_or(false);
        if !is_dir {
            return Err(FsError::NotADirectory(target).into());
        }
        remove(ctx, &target, "Directory deleted")
    }

    fn usage(&self) -> &'static str {
        "rmdir <dir>"
    }
}
