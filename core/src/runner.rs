//! Toolkit invocation seam and its process-backed implementation.

use crate::{Error, LaunchConfig, Result};
use std::ffi::OsString;
use std::io;
use std::process::Command;

/// Trait describing how the launcher invokes the external toolkit.
///
/// One call spawns the toolkit once with the given arguments, lets its
/// output stream to the launcher's own console, blocks until it exits,
/// and returns the exit code. Errors cover failures to start or wait on
/// the process, never the process's own non-zero exits.
pub trait ToolkitInvoker {
    fn invoke(&self, args: &[OsString]) -> Result<i32>;
}

/// Invoker that runs the toolkit as a child process with inherited stdio.
pub struct ProcessInvoker {
    config: LaunchConfig,
}

impl ProcessInvoker {
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }
}

impl ToolkitInvoker for ProcessInvoker {
    fn invoke(&self, args: &[OsString]) -> Result<i32> {
        let status = Command::new(&self.config.program)
            .args(&self.config.module_args)
            .args(args)
            .status()
            .map_err(|err| {
                if err.kind() == io::ErrorKind::NotFound {
                    Error::ToolkitNotFound {
                        program: self.config.program.clone(),
                    }
                } else {
                    Error::Launch(err)
                }
            })?;

        // A signal-terminated child carries no exit code; report it as
        // a plain failure so the pause-for-visibility path still runs.
        Ok(status.code().unwrap_or(1))
    }
}
