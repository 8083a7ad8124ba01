//! Help/forward dispatch around a single toolkit invocation.

use crate::{Acknowledge, Error, Result, ToolkitInvoker};
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

const SEPARATOR: &str = "============================================================";

/// Set the process working directory to the launcher's own directory
/// and return it.
///
/// The toolkit resolves relative paths (config, session logs) against
/// the current directory; pinning it to the install location keeps
/// those stable no matter where the caller's shell was positioned.
/// There is no sensible fallback, so any failure here is fatal.
pub fn pin_working_directory() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(Error::WorkDir)?;
    let dir = exe
        .parent()
        .ok_or_else(|| {
            Error::WorkDir(io::Error::new(
                io::ErrorKind::NotFound,
                "executable path has no parent directory",
            ))
        })?
        .to_path_buf();
    env::set_current_dir(&dir).map_err(Error::WorkDir)?;
    Ok(dir)
}

/// Route one launcher invocation to the toolkit and return the exit code.
///
/// No arguments: show the toolkit's help, print the usage block, wait
/// for one acknowledgment, and report success regardless of the help
/// invocation's own status. With arguments: forward them verbatim, wait
/// for one acknowledgment only when the toolkit failed, and pass its
/// exit code through unchanged.
///
/// Errors from the invoker (toolkit missing, spawn failure) propagate
/// to the caller, which is expected to surface them and pause.
pub fn run<I, W, A>(
    args: &[OsString],
    help_arg: &str,
    invoker: &I,
    out: &mut W,
    ack: &mut A,
) -> Result<i32>
where
    I: ToolkitInvoker,
    W: Write,
    A: Acknowledge,
{
    if args.is_empty() {
        invoker.invoke(&[OsString::from(help_arg)])?;
        write_usage_block(out)?;
        ack.wait();
        return Ok(0);
    }

    let status = invoker.invoke(args)?;
    if status != 0 {
        writeln!(out)?;
        ack.wait();
    }
    Ok(status)
}

fn write_usage_block(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "  Start obd-launcher with a toolkit command to run it.")?;
    writeln!(out, "  Example: obd-launcher scan")?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)
}
