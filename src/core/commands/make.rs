use super::{display_name, single_arg, Command, CommandContext, CommandError};
use crate::fs::ops::{create_dir, create_file};

#[derive(Clone, Default)]
pub struct MkdirCommand;

impl MkdirCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for MkdirCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let spec = single_arg(args, self.usage())?;
        let target = ctx.session.resolve(&spec)?;
        create_dir(&target)?;
        writeln!(ctx.out, "Directory created: {}", display_name(&target))?;
        Ok(())
    }

    fn usage(&self) -> &'static str {
        "mkdir <dir>"
    }
}

#[derive(Clone, Default)]
pub struct CreateCommand;

impl CreateCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CreateCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let spec = single_arg(args, self.usage())?;
        let target = ctx.session.resolve(&spec)?;
        create_file(&target)?;
        writeln!(ctx.out, "File created: {}", display_name(&target))?;
        Ok(())
    }

    fn usage(&self) -> &'static str {
        "create <file>"
    }
}
