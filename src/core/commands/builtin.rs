use super::{Command, CommandContext, CommandError};

#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<(), CommandError> {
        ctx.session.stop();
        Ok(())
    }

    fn usage(&self) -> &'static str {
        "exit"
    }
}

#[derive(Clone)]
pub struct HelpCommand {
    usages: Vec<&'static str>,
}

impl HelpCommand {
    pub fn new(mut usages: Vec<&'static str>) -> Self {
        usages.push("help");
        usages.sort_unstable();
        usages.dedup();
        Self { usages }
    }
}

impl Command for HelpCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<(), CommandError> {
        writeln!(ctx.out, "Commands:")?;
        for usage in &self.usages {
            writeln!(ctx.out, "  {usage}")?;
        }
        writeln!(ctx.out, "Quote names that contain spaces: copy 'a b.txt' dest")?;
        Ok(())
    }

    fn usage(&self) -> &'static str {
        "help"
    }
}
