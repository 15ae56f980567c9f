mod completer;
mod lines;

pub use completer::ShellCompleter;
pub use lines::{EditorLines, LineSource, ScriptedLines};
