use clap::Parser;
use fsnav::flags::Flags;
use fsnav::logging::init_logging;
use fsnav::shell::Shell;

fn main() -> Result<(), fsnav::error::ShellError> {
    let flags = Flags::parse();
    init_logging(&flags);

    let mut shell = Shell::new(flags)?;
    shell.run()
}
