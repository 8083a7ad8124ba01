mod pause;

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use obd_launcher_core::{config, launcher, Acknowledge, ProcessInvoker};
use pause::KeyPause;

/// Console launcher for the OBD diagnostic toolkit.
///
/// The launcher owns no flags of its own: help and version are disabled
/// so that every token, hyphen-led or not, lands in `args` and reaches
/// the toolkit untouched.
#[derive(Debug, Parser)]
#[command(
    name = "obd-launcher",
    about = "Forwards commands to the OBD diagnostic toolkit",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Toolkit command and options, forwarded verbatim.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut pause = KeyPause::new();

    match launch(&cli.args, &mut pause) {
        // Exit codes outside u8 range cannot be represented; fold them
        // into a generic failure.
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(err) => {
            eprintln!("obd-launcher: {err}");
            pause.wait();
            ExitCode::FAILURE
        }
    }
}

fn launch(args: &[OsString], pause: &mut KeyPause) -> obd_launcher_core::Result<i32> {
    let home = launcher::pin_working_directory()?;
    let cfg = config::load_config(home.join(config::CONFIG_FILE))?;
    let help_arg = cfg.help_arg.clone();
    let invoker = ProcessInvoker::new(cfg);
    launcher::run(args, &help_arg, &invoker, &mut io::stdout().lock(), pause)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Cli {
        Cli::parse_from(argv)
    }

    #[test]
    fn no_arguments_parses_to_empty() {
        let cli = parse(&["obd-launcher"]);
        assert!(cli.args.is_empty());
    }

    #[test]
    fn subcommand_and_options_are_captured_in_order() {
        let cli = parse(&["obd-launcher", "scan", "--port", "COM3"]);
        let expected: Vec<OsString> =
            ["scan", "--port", "COM3"].map(OsString::from).to_vec();
        assert_eq!(cli.args, expected);
    }

    #[test]
    fn help_flag_is_forwarded_not_intercepted() {
        let cli = parse(&["obd-launcher", "--help"]);
        assert_eq!(cli.args, vec![OsString::from("--help")]);
    }

    #[test]
    fn leading_hyphen_values_survive() {
        let cli = parse(&["obd-launcher", "--version", "-q", "dtc", "read"]);
        let expected: Vec<OsString> =
            ["--version", "-q", "dtc", "read"].map(OsString::from).to_vec();
        assert_eq!(cli.args, expected);
    }
}
