use std::io::{self, Write};

use crate::core::commands::{CommandContext, CommandError};
use crate::fs::FsError;
use crate::input::EditorLines;

pub(crate) trait CommandHandler {
    /// Run one line. Failures are reported to the user and never end the shell.
    fn execute_command(&mut self, line: &str);
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str) {
        let mut out = io::stdout();
        let mut input = EditorLines::new(&mut self.editor);
        let mut ctx = CommandContext {
            session: &mut self.session,
            out: &mut out,
            input: &mut input,
        };

        let result = self.executor.execute_line(line, &mut ctx);
        let _ = out.flush();

        if let Err(e) = result {
            eprintln!("{}", self.highlighter.highlight_error(&format!("Error: {e}")));
            if let CommandError::Fs(fs_err) = &e {
                report_failures(fs_err);
            }
        }
    }
}

fn report_failures(err: &FsError) {
    for failure in err.failures() {
        eprintln!("  {failure}");
    }
}
