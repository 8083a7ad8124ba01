//! Launch configuration for the external toolkit invocation.

use crate::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// File name of the optional per-install override, looked up next to
/// the launcher binary.
pub const CONFIG_FILE: &str = "obd-launcher.toml";

/// How to invoke the external diagnostic toolkit.
///
/// The defaults run the toolkit as a Python module; installs where the
/// interpreter goes by another name (`python3`, `py`) override them in
/// [`CONFIG_FILE`] without rebuilding the launcher.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Program to spawn.
    pub program: String,
    /// Arguments placed before the forwarded ones, selecting the toolkit module.
    pub module_args: Vec<String>,
    /// Argument sent when the launcher is started without any of its own.
    pub help_arg: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            program: "python".into(),
            module_args: vec!["-m".into(), "obd_toolkit".into()],
            help_arg: "--help".into(),
        }
    }
}

/// Load configuration from the provided path.
///
/// A missing file is not an error: zero-config installs get the
/// defaults. A file that exists but cannot be read or parsed is fatal,
/// since silently ignoring a broken override would launch the wrong
/// toolkit.
pub fn load_config(path: impl AsRef<Path>) -> Result<LaunchConfig> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(LaunchConfig::default())
        }
        Err(err) => {
            return Err(Error::Config {
                path: path.to_path_buf(),
                message: err.to_string(),
            })
        }
    };

    toml::from_str(&text).map_err(|err| Error::Config {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(dir.path().join(CONFIG_FILE)).expect("load");
        assert_eq!(cfg, LaunchConfig::default());
    }

    #[test]
    fn loads_full_override() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
program = "py"
module_args = ["-3", "-m", "obd_toolkit"]
help_arg = "--help"
"#,
        )
        .expect("write config");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.program, "py");
        assert_eq!(cfg.module_args, vec!["-3", "-m", "obd_toolkit"]);
        assert_eq!(cfg.help_arg, "--help");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "program = \"python3\"\n").expect("write config");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.program, "python3");
        assert_eq!(cfg.module_args, LaunchConfig::default().module_args);
        assert_eq!(cfg.help_arg, LaunchConfig::default().help_arg);
    }

    #[test]
    fn malformed_file_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "program = [not toml").expect("write config");

        match load_config(&path) {
            Err(Error::Config { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
