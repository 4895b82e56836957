//! User configuration (`~/.rpncalc.toml`)

use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) prompt: String,
    pub(crate) banner: bool,
    pub(crate) history: bool,
    pub(crate) history_file: Option<PathBuf>,
    pub(crate) trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "rpn> ".to_string(),
            banner: false,
            history: true,
            history_file: None,
            trace: false,
        }
    }
}

/// Get home directory
pub(crate) fn dirs_home() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}

impl Config {
    /// Load the config file.
    ///
    /// An explicit path (argument or `$RPNCALC_CONFIG`) must exist; the default
    /// `~/.rpncalc.toml` is optional.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => match env::var_os("RPNCALC_CONFIG") {
                Some(path) => (PathBuf::from(path), true),
                None => match dirs_home() {
                    Some(home) => (home.join(".rpncalc.toml"), false),
                    None => return Ok(Config::default().with_env()),
                },
            },
        };

        let config = match fs::read_to_string(&path) {
            Ok(content) => {
                Config::from_toml(&content).map_err(|source| ConfigError::Parse { path, source })?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => Config::default(),
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        Ok(config.with_env())
    }

    pub(crate) fn from_toml(content: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply environment overrides
    fn with_env(mut self) -> Self {
        if env::var_os("RPNCALC_BANNER").is_some() {
            self.banner = true;
        }
        self
    }

    /// Where REPL history lives, if history is enabled
    pub(crate) fn history_path(&self) -> Option<PathBuf> {
        if !self.history {
            return None;
        }
        self.history_file
            .clone()
            .or_else(|| dirs_home().map(|h| h.join(".rpncalc_history")))
    }
}
