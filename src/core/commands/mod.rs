use std::collections::BTreeMap;
use std::io::Write;

use thiserror::Error;
use tracing::debug;

mod alias;
mod builtin;
mod cd;
mod copy;
mod delete;
mod edit;
mod info;
mod ls;
mod make;
mod open;
mod parse;
mod rename;
mod search;

pub use alias::AliasCommand;
pub use builtin::{ExitCommand, HelpCommand};
pub use cd::{CdCommand, PwdCommand};
pub use copy::CopyCommand;
pub use delete::{DelCommand, RmdirCommand};
pub use edit::EditCommand;
pub use info::InfoCommand;
pub use ls::LsCommand;
pub use make::{CreateCommand, MkdirCommand};
pub use open::OpenCommand;
pub use parse::{tokenize, ParseError};
pub use rename::{MoveCommand, RenameCommand};
pub use search::SearchCommand;

use crate::core::state::Session;
use crate::fs::{display_name, FsError};
use crate::highlight::SyntaxHighlighter;
use crate::input::LineSource;
use crate::process::OpenError;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (try 'help')")]
    NotFound(String),
    #[error("usage: {0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Refused(String),
    #[error(transparent)]
    Fs(#[from] FsError),
    #[error(transparent)]
    Open(#[from] OpenError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// What a command gets to work with: the session, somewhere to print, and
/// a source of further input lines.
pub struct CommandContext<'a> {
    pub session: &'a mut Session,
    pub out: &'a mut dyn Write,
    pub input: &'a mut dyn LineSource,
}

pub trait Command {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError>;

    fn usage(&self) -> &'static str;
}

/// Join every argument back into one path, so unquoted names with spaces
/// still work for commands that take a single path.
///
/// Words are rejoined with a single space: `del my  notes.txt` names
/// `my notes.txt`. Names with other whitespace runs must be quoted.
fn single_arg(args: &[String], usage: &str) -> Result<String, CommandError> {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(usage.to_string()));
    }
    Ok(args.join(" "))
}

fn two_args<'a>(args: &'a [String], usage: &str) -> Result<(&'a str, &'a str), CommandError> {
    match args {
        [first, second] => Ok((first, second)),
        _ => Err(CommandError::InvalidArguments(usage.to_string())),
    }
}

#[derive(Clone)]
enum CommandType {
    Ls(LsCommand),
    Cd(CdCommand),
    Pwd(PwdCommand),
    Copy(CopyCommand),
    Move(MoveCommand),
    Rename(RenameCommand),
    Del(DelCommand),
    Rmdir(RmdirCommand),
    Mkdir(MkdirCommand),
    Create(CreateCommand),
    Search(SearchCommand),
    Info(InfoCommand),
    Open(OpenCommand),
    Edit(EditCommand),
    Alias(AliasCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        match self {
            CommandType::Ls(cmd) => cmd.execute(ctx, args),
            CommandType::Cd(cmd) => cmd.execute(ctx, args),
            CommandType::Pwd(cmd) => cmd.execute(ctx, args),
            CommandType::Copy(cmd) => cmd.execute(ctx, args),
            CommandType::Move(cmd) => cmd.execute(ctx, args),
            CommandType::Rename(cmd) => cmd.execute(ctx, args),
            CommandType::Del(cmd) => cmd.execute(ctx, args),
            CommandType::Rmdir(cmd) => cmd.execute(ctx, args),
            CommandType::Mkdir(cmd) => cmd.execute(ctx, args),
            CommandType::Create(cmd) => cmd.execute(ctx, args),
            CommandType::Search(cmd) => cmd.execute(ctx, args),
            CommandType::Info(cmd) => cmd.execute(ctx, args),
            CommandType::Open(cmd) => cmd.execute(ctx, args),
            CommandType::Edit(cmd) => cmd.execute(ctx, args),
            CommandType::Alias(cmd) => cmd.execute(ctx, args),
            CommandType::Help(cmd) => cmd.execute(ctx, args),
            CommandType::Exit(cmd) => cmd.execute(ctx, args),
        }
    }

    fn usage(&self) -> &'static str {
        match self {
            CommandType::Ls(cmd) => cmd.usage(),
            CommandType::Cd(cmd) => cmd.usage(),
            CommandType::Pwd(cmd) => cmd.usage(),
            CommandType::Copy(cmd) => cmd.usage(),
            CommandType::Move(cmd) => cmd.usage(),
            CommandType::Rename(cmd) => cmd.usage(),
            CommandType::Del(cmd) => cmd.usage(),
            CommandType::Rmdir(cmd) => cmd.usage(),
            CommandType::Mkdir(cmd) => cmd.usage(),
            CommandType::Create(cmd) => cmd.usage(),
            CommandType::Search(cmd) => cmd.usage(),
            CommandType::Info(cmd) => cmd.usage(),
            CommandType::Open(cmd) => cmd.usage(),
            CommandType::Edit(cmd) => cmd.usage(),
            CommandType::Alias(cmd) => cmd.usage(),
            CommandType::Help(cmd) => cmd.usage(),
            CommandType::Exit(cmd) => cmd.usage(),
        }
    }
}

#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
}

impl CommandExecutor {
    pub fn new(highlighter: SyntaxHighlighter) -> Self {
        let mut executor = Self {
            commands: BTreeMap::new(),
        };

        executor.register("ls", CommandType::Ls(LsCommand::new(highlighter)));
        executor.register("cd", CommandType::Cd(CdCommand::new()));
        executor.register("pwd", CommandType::Pwd(PwdCommand::new()));
        executor.register("copy", CommandType::Copy(CopyCommand::new()));
        executor.register("move", CommandType::Move(MoveCommand::new()));
        executor.register("rename", CommandType::Rename(RenameCommand::new()));
        executor.register("del", CommandType::Del(DelCommand::new()));
        executor.register("rmdir", CommandType::Rmdir(RmdirCommand::new()));
        executor.register("mkdir", CommandType::Mkdir(MkdirCommand::new()));
        executor.register("create", CommandType::Create(CreateCommand::new()));
        executor.register("search", CommandType::Search(SearchCommand::new()));
        executor.register("info", CommandType::Info(InfoCommand::new()));
        executor.register("open", CommandType::Open(OpenCommand::new()));
        executor.register("edit", CommandType::Edit(EditCommand::new()));
        executor.register("alias", CommandType::Alias(AliasCommand::new()));
        executor.register("exit", CommandType::Exit(ExitCommand::new()));
        executor.register("quit", CommandType::Exit(ExitCommand::new()));

        // Registered last so it can list everything above.
        let usages = executor.commands.values().map(Command::usage).collect();
        executor.register("help", CommandType::Help(HelpCommand::new(usages)));

        executor
    }

    fn register(&mut self, name: &'static str, command: CommandType) {
        self.commands.insert(name, command);
    }

    pub fn execute(
        &self,
        command: &str,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<(), CommandError> {
        let cmd = self
            .commands
            .get(command)
            .ok_or_else(|| CommandError::NotFound(command.to_string()))?;
        debug!(command, ?args, "executing");
        cmd.execute(ctx, args)
    }

    /// Expand aliases, split into words and run one input line.
    pub fn execute_line(&self, line: &str, ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        let expanded = ctx.session.aliases().expand_command(line).into_owned();
        let words = tokenize(&expanded)?;
        match words.split_first() {
            Some((command, args)) => self.execute(command, args, ctx),
            None => Ok(()),
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::config::Settings;
    use crate::input::ScriptedLines;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Temp directory, a session rooted in it and captured output.
    pub(crate) struct Harness {
        _temp: TempDir,
        pub root: PathBuf,
        pub session: Session,
        pub executor: CommandExecutor,
        pub out: Vec<u8>,
        pub input: ScriptedLines,
    }

    impl Harness {
        pub(crate) fn new() -> Self {
            let temp = tempfile::tempdir().expect("tempdir");
            let root = fs::canonicalize(temp.path()).expect("canonical tempdir");
            let session = Session::new(&root, Settings::default()).expect("session");
            Self {
                _temp: temp,
                root,
                session,
                executor: CommandExecutor::new(SyntaxHighlighter::disabled()),
                out: Vec::new(),
                input: ScriptedLines::default(),
            }
        }

        pub(crate) fn run(&mut self, line: &str) -> Result<(), CommandError> {
            let mut ctx = CommandContext {
                session: &mut self.session,
                out: &mut self.out,
                input: &mut self.input,
            };
            self.executor.execute_line(line, &mut ctx)
        }

        pub(crate) fn output(&self) -> String {
            String::from_utf8_lossy(&self.out).into_owned()
        }

        pub(crate) fn write(&self, rel: &str, contents: &str) -> PathBuf {
            let path = self.root.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create parent");
            }
            fs::write(&path, contents).expect("write file");
            path
        }

        pub(crate) fn path(&self, rel: &str) -> PathBuf {
            self.root.join(rel)
        }

        pub(crate) fn cwd(&self) -> &Path {
            self.session.current_dir()
        }
    }

    #[test]
    fn test_unknown_command() {
        let mut h = Harness::new();
        assert!(matches!(h.run("frobnicate"), Err(CommandError::NotFound(_))));
    }

    #[test]
    fn test_blank_line_is_noop() {
        let mut h = Harness::new();
        assert!(h.run("   ").is_ok());
        assert!(h.output().is_empty());
    }

    #[test]
    fn test_builtin_detection() {
        let h = Harness::new();
        for name in ["ls", "cd", "copy", "move", "del", "search", "help", "exit"] {
            assert!(h.executor.is_builtin(name), "{name} should be registered");
        }
        assert!(!h.executor.is_builtin("rm"));
        assert!(h.executor.names().any(|n| n == "rename"));
    }

    #[test]
    fn test_alias_expansion_runs_target() {
        let mut h = Harness::new();
        h.write("inner/x.txt", "x");
        h.session.aliases_mut().add("go", "cd");

        h.run("go inner").expect("aliased cd");
        assert_eq!(h.cwd(), h.path("inner"));
    }

    #[test]
    fn test_unterminated_quote() {
        let mut h = Harness::new();
        assert!(matches!(h.run("del 'oops"), Err(CommandError::Parse(_))));
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::NotFound("test".to_string()),
            CommandError::InvalidArguments("copy <source> <dest>".to_string()),
            CommandError::Fs(FsError::AtRoot),
            CommandError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "io error",
            )),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
