use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::rules::{DEFAULT_NAME_PATTERNS, DURATION_TYPE, Mode, Rules};

/// File looked up in the crate root when no config path is given.
pub const CONFIG_FILE: &str = "keyedlit.toml";

/// Settings for one run, read from `keyedlit.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Require every exported field instead of just timeouts and keep-alives
    pub strict: bool,
    /// Field name fragments that mark a timeout or keep-alive
    pub name_patterns: Vec<String>,
    /// Types those fields must have to be checked
    pub duration_types: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strict: false,
            name_patterns: DEFAULT_NAME_PATTERNS.iter().map(|p| p.to_string()).collect(),
            duration_types: vec![DURATION_TYPE.to_string()],
        }
    }
}

impl Config {
    pub fn from_toml(path: &Path, text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &text)
    }

    /// Load `keyedlit.toml` from the crate root, or fall back to defaults.
    pub fn discover(crate_root: &Path) -> Result<Self> {
        let path: PathBuf = crate_root.join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading configuration");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Freeze the configuration into the rule set used for traversal.
    pub fn rules(&self) -> Rules {
        Rules {
            mode: if self.strict { Mode::Strict } else { Mode::Default },
            name_patterns: self.name_patterns.clone(),
            duration_types: self.duration_types.clone(),
        }
    }
}
