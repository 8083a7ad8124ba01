//! Core crate for the OBD toolkit launcher.
//!
//! Everything that decides *what* the launcher does lives here: the
//! help/forward dispatch, the toolkit invocation seam, and the launch
//! configuration. Terminal concerns (keypress pause, process exit code)
//! live in the binary crate.

pub mod config;
pub mod console;
pub mod launcher;
pub mod runner;

pub use config::{load_config, LaunchConfig, CONFIG_FILE};
pub use console::Acknowledge;
pub use launcher::{pin_working_directory, run};
pub use runner::{ProcessInvoker, ToolkitInvoker};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Common error type for launcher failures.
///
/// The toolkit returning a non-zero exit status is *not* an error here;
/// these variants cover only failures of the launch itself.
#[derive(Debug, Error)]
pub enum Error {
    /// The launcher could not resolve or enter its own install directory.
    #[error("could not resolve the launcher's install directory: {0}")]
    WorkDir(#[source] io::Error),
    /// A config file was present but unreadable or malformed.
    #[error("invalid launcher config `{path}`: {message}")]
    Config { path: PathBuf, message: String },
    /// The configured toolkit program does not exist on this system.
    #[error("toolkit program `{program}` was not found; install it or edit {CONFIG_FILE}")]
    ToolkitNotFound { program: String },
    /// The toolkit process could not be started or waited on.
    #[error("failed to launch the toolkit: {0}")]
    Launch(#[source] io::Error),
    /// Writing launcher output to the console failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenient alias for results returned by the core crate.
pub type Result<T> = std::result::Result<T, Error>;
