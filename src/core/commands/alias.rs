use super::{Command, CommandContext, CommandError};

#[derive(Clone, Default)]
pub struct AliasCommand;

impl AliasCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for AliasCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        if args.is_empty() {
            for (alias, command) in ctx.session.aliases().get_all() {
                writeln!(ctx.out, "{}='{}'", alias, command)?;
            }
            return Ok(());
        }

        let alias_str = args.join(" ");
        let Some((name, value)) = alias_str.split_once('=') else {
            return Err(CommandError::InvalidArguments(self.usage().to_string()));
        };
        let name = name.trim();
        let value = value.trim().trim_matches(|c| c == '\'' || c == '"');
        if name.is_empty() || value.is_empty() {
            return Err(CommandError::InvalidArguments(self.usage().to_string()));
        }

        ctx.session.aliases_mut().add(name, value);
        Ok(())
    }

    fn usage(&self) -> &'static str {
        "alias [name='command']"
    }
}
