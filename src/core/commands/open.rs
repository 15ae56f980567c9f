use super::{display_name, single_arg, Command, CommandContext, CommandError};
use crate::process::open_path;

#[derive(Clone, Default)]
pub struct OpenCommand;

impl OpenCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for OpenCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let spec = single_arg(args, self.usage())?;
        let path = ctx.session.resolve_existing(&spec)?;
        open_path(&path)?;
        writeln!(ctx.out, "Opened: {}", display_name(&path))?;
        Ok(())
    }

    fn usage(&self) -> &'static str {
        "open <file>"
    }
}
