use tracing::info;

use super::{single_arg, Command, CommandContext, CommandError};
use crate::fs::ops::write_contents;

#[derive(Clone, Default)]
pub struct EditCommand;

impl EditCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EditCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let spec = single_arg(args, self.usage())?;
        let path = ctx.session.resolve_existing(&spec)?;
        if path.is_dir() {
            return Err(CommandError::Refused(format!(
                "cannot edit a directory: {}",
                path.display()
            )));
        }

        let sentinel = ctx.session.settings().sentinel.clone();
        writeln!(
            ctx.out,
            "Enter new content (type '{sentinel}' on a new line to save and exit):"
        )?;
        ctx.out.flush()?;

        let mut buffer = String::new();
        loop {
            match ctx.input.read_line() {
                Some(line) if line.trim().eq_ignore_ascii_case(&sentinel) => break,
                Some(line) => {
                    buffer.push_str(&line);
                    buffer.push('\n');
                }
                None => {
                    writeln!(ctx.out, "Input ended before '{sentinel}', file left unchanged.")?;
                    return Ok(());
                }
            }
        }

        write_contents(&path, &buffer)?;
        info!(path = %path.display(), bytes = buffer.len(), "file rewritten");
        writeln!(ctx.out, "File updated successfully!")?;
        Ok(())
    }

    fn usage(&self) -> &'static str {
        "edit <file>"
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::Harness;
    use super::*;
    use crate::input::ScriptedLines;
    use std::fs;

    #[test]
    fn test_edit_until_sentinel() {
        let mut h = Harness::new();
        h.write("notes.txt", "old text that goes away");
        h.input = ScriptedLines::new(["first line", "second line", "save", "ignored"]);

        h.run("edit notes.txt").expect("edit");
        assert_eq!(
            fs::read_to_string(h.path("notes.txt")).ok().as_deref(),
            Some("first line\nsecond line\n")
        );
        assert!(h.output().ends_with("File updated successfully!\n"));
    }

    #[test]
    fn test_edit_aborts_on_end_of_input() {
        let mut h = Harness::new();
        h.write("notes.txt", "keep me");
        h.input = ScriptedLines::new(["half written"]);

        h.run("edit notes.txt").expect("edit");
        assert_eq!(fs::read_to_string(h.path("notes.txt")).ok().as_deref(), Some("keep me"));
    }

    #[test]
    fn test_edit_rejects_missing_and_directories() {
        let mut h = Harness::new();
        h.write("dir/x", "x");

        assert!(matches!(h.run("edit nope.txt"), Err(CommandError::Fs(_))));
        assert!(matches!(h.run("edit dir"), Err(CommandError::Refused(_))));
    }
}
