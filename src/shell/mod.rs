use std::env;
use std::path::PathBuf;

use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};
use tracing::{debug, warn};

mod executor;

use crate::{
    core::{
        commands::CommandExecutor,
        config::{ColorMode, Config},
        state::Session,
    },
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::ShellCompleter,
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) editor: Editor<ShellCompleter, FileHistory>,
    pub(crate) session: Session,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: SyntaxHighlighter,
    pub(crate) history_path: PathBuf,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut config = Config::new(flags.config.clone())?;
        config.load()?;
        let (paths, aliases, settings) = config.into_parts();

        let color = !flags.no_color && settings.color == ColorMode::Auto;
        let highlighter = SyntaxHighlighter::new(color);

        let start_dir = match flags.directory {
            Some(dir) => dir,
            None => env::current_dir()?,
        };
        let history_size = settings.history_size;
        let session = Session::new(&start_dir, settings)?.with_aliases(aliases);

        let executor = CommandExecutor::new(highlighter);
        let completer = ShellCompleter::new(
            executor.names(),
            session.current_dir().to_path_buf(),
            highlighter,
        );

        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));
        editor.set_max_history_size(history_size)?;
        if let Err(e) = editor.load_history(&paths.history_path) {
            debug!(path = %paths.history_path.display(), error = %e, "no history loaded");
        }

        // Readline handles Ctrl-C at the prompt; this covers long running commands.
        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to leave the explorer");
        })?;

        Ok(Shell {
            editor,
            session,
            executor,
            highlighter,
            history_path: paths.history_path,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        println!("File explorer. Type 'help' for commands.");

        while self.session.is_running() {
            self.sync_helper();
            let prompt = format!("{} > ", self.session.current_dir().display());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        warn!(error = %e, "couldn't add to history");
                    }
                    self.execute_command(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", self.highlighter.highlight_hint("Use 'exit' to leave"));
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        println!("Exiting...");
        if let Err(e) = self.editor.save_history(&self.history_path) {
            warn!(path = %self.history_path.display(), error = %e, "couldn't save history");
        }
        Ok(())
    }

    /// Point completion at the current directory and the current alias set.
    fn sync_helper(&mut self) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_cwd(self.session.current_dir());
            helper.update_aliases(self.session.aliases().get_all());
        }
    }
}
