use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("Opening files is not supported on this system (no '{0}' found)")]
    Unsupported(String),
    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("'{program}' exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Hand `path` to the desktop's default application.
pub fn open_path(path: &Path) -> Result<(), OpenError> {
    let (program, args) = opener_command(path);
    debug!(program, ?args, "launching opener");

    let mut command = Command::new(program);
    command
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(OpenError::Unsupported(program.to_string()))
        }
        Err(source) => {
            return Err(OpenError::Launch {
                program: program.to_string(),
                source,
            })
        }
    };

    let status = child.wait().map_err(|source| OpenError::Launch {
        program: program.to_string(),
        source,
    })?;
    if !status.success() {
        return Err(OpenError::Failed {
            program: program.to_string(),
            status,
        });
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> (&'static str, Vec<OsString>) {
    ("open", vec![path.as_os_str().to_owned()])
}

#[cfg(windows)]
fn opener_command(path: &Path) -> (&'static str, Vec<OsString>) {
    // The empty string is the window title `start` expects first.
    (
        "cmd",
        vec!["/C".into(), "start".into(), "".into(), path.as_os_str().to_owned()],
    )
}

#[cfg(not(any(target_os = "macos", windows)))]
fn opener_command(path: &Path) -> (&'static str, Vec<OsString>) {
    ("xdg-open", vec![path.as_os_str().to_owned()])
}
