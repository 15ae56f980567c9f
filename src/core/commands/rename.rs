use super::{display_name, two_args, Command, CommandContext, CommandError};
use crate::fs::ops::{move_entry, rename_entry};

#[derive(Clone, Default)]
pub struct MoveCommand;

impl MoveCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for MoveCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let (src, dst) = two_args(args, self.usage())?;
        let source = ctx.session.resolve_existing(src)?;
        let dest = ctx.session.resolve(dst)?;

        if ctx.session.current_dir().starts_with(&source) {
            return Err(CommandError::Refused(
                "cannot move the working directory or one of its parents".to_string(),
            ));
        }

        let moved_to = move_entry(&source, &dest)?;
        writeln!(ctx.out, "Moved to: {}", moved_to.display())?;
        Ok(())
    }

    fn usage(&self) -> &'static str {
        "move <source> <dest>"
    }
}

#[derive(Clone, Default)]
pub struct RenameCommand;

impl RenameCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RenameCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let (old, new) = two_args(args, self.usage())?;
        let from = ctx.session.resolve_existing(old)?;
        let to = ctx.session.resolve(new)?;

        if ctx.session.current_dir().starts_with(&from) {
            return Err(CommandError::Refused(
                "cannot rename the working directory or one of its parents".to_string(),
            ));
        }

        rename_entry(&from, &to)?;
        writeln!(ctx.out, "Renamed to: {}", display_name(&to))?;
        Ok(())
    }

    fn usage(&self) -> &'static str {
        "rename <old> <new>"
    }
}
