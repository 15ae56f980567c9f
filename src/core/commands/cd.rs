use super::{Command, CommandContext, CommandError};

#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        // No argument stays put, like ".".
        let target = args.join(" ");
        ctx.session.change_dir(&target)?;
        Ok(())
    }

    fn usage(&self) -> &'static str {
        "cd [dir]"
    }
}

#[derive(Clone, Default)]
pub struct PwdCommand;

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<(), CommandError> {
        writeln!(ctx.out, "{}", ctx.session.current_dir().display())?;
        Ok(())
    }

    fn usage(&self) -> &'static str {
        "pwd"
    }
}
