use super::{single_arg, Command, CommandContext, CommandError};
use crate::fs::search;

#[derive(Clone, Default)]
pub struct SearchCommand;

impl SearchCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SearchCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let query = single_arg(args, self.usage())?;

        let mut found = 0usize;
        let mut matches = search(&query, ctx.session.current_dir());
        for path in matches.by_ref() {
            writeln!(ctx.out, "Found: {}", path.display())?;
            found += 1;
        }

        if found == 0 {
            writeln!(ctx.out, "No matches for '{query}'")?;
        }
        if matches.skipped() > 0 {
            writeln!(ctx.out, "({} unreadable entries skipped)", matches.skipped())?;
        }
        Ok(())
    }

    fn usage(&self) -> &'static str {
        "search <name>"
    }
}
