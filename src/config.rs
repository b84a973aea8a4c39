use std::{
    fs,
    path::{self, Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::tools::{DEFAULT_MSGFMT, DEFAULT_XGETTEXT};

pub const CONFIG_FILE_NAME: &str = ".pomakerc.json";

pub const DEFAULT_LANGUAGES: &[&str] = &["fa", "en"];
pub const DEFAULT_DOMAIN: &str = "base";
pub const DEFAULT_SOURCE_LANGUAGE: &str = "Python";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_xgettext")]
    pub xgettext: String,
    #[serde(default = "default_msgfmt")]
    pub msgfmt: String,
    #[serde(default)]
    pub strict: bool,
}

fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect()
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_source_language() -> String {
    DEFAULT_SOURCE_LANGUAGE.to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["py".to_string()]
}

fn default_xgettext() -> String {
    DEFAULT_XGETTEXT.to_string()
}

fn default_msgfmt() -> String {
    DEFAULT_MSGFMT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            domain: default_domain(),
            source_language: default_source_language(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            xgettext: default_xgettext(),
            msgfmt: default_msgfmt(),
            strict: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            anyhow::bail!("'languages' must name at least one language");
        }
        if self.domain.trim().is_empty() {
            anyhow::bail!("'domain' must not be empty");
        }
        if self.extensions.is_empty() {
            anyhow::bail!("'extensions' must name at least one file extension");
        }

        // Patterns without wildcards are literal paths and never fail to parse.
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Walk up from `start_dir` looking for the config file. Relative starts such
/// as `.` are made absolute first so the walk can leave the working directory.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = path::absolute(start_dir).unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
