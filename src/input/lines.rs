use std::collections::VecDeque;

use rustyline::{error::ReadlineError, history::FileHistory, Editor};
use tracing::warn;

use super::ShellCompleter;

/// Where a command reads follow-up lines from, such as the body typed into `edit`.
pub trait LineSource {
    /// The next line without its terminator, or `None` once input has ended.
    fn read_line(&mut self) -> Option<String>;
}

/// Lines fed from memory.
#[derive(Debug, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

/// Lines read through the interactive editor, without touching history.
pub struct EditorLines<'a> {
    editor: &'a mut Editor<ShellCompleter, FileHistory>,
}

impl<'a> EditorLines<'a> {
    pub fn new(editor: &'a mut Editor<ShellCompleter, FileHistory>) -> Self {
        Self { editor }
    }
}

impl LineSource for EditorLines<'_> {
    fn read_line(&mut self) -> Option<String> {
        match self.editor.readline("") {
            Ok(line) => Some(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
            Err(e) => {
                warn!(error = %e, "failed to read input line");
                None
            }
        }
    }
}
