//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/scopechain/scopechain.toml`
//! 3. Local config: file passed with `--config`
//! 4. Environment variables: `SCOPECHAIN_*` prefix
//! 5. Command-line overrides (applied by the caller via [`Settings::apply_overrides`])

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{Greeting, DEFAULT_COURSE, DEFAULT_EXCLAMATION, DEFAULT_WELCOME};

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub welcome: Option<String>,
    pub course: Option<String>,
    pub exclamation: Option<String>,
}

/// Unified configuration for scopechain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Process-wide value printed on every line (default: "Welcome")
    pub welcome: String,
    /// Value bound by the outermost unit (default: "Holberton")
    pub course: String,
    /// Punctuation bound by the middle unit (default: "!")
    pub exclamation: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            welcome: DEFAULT_WELCOME.into(),
            course: DEFAULT_COURSE.into(),
            exclamation: DEFAULT_EXCLAMATION.into(),
        }
    }
}

/// Get the XDG config directory for scopechain.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "scopechain").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("scopechain.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy().into_owned();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        // Undefined variable: keep it literal, still expand the tilde
        Err(_) => PathBuf::from(shellexpand::tilde(&raw).into_owned()),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value, otherwise keep self.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            welcome: overlay
                .welcome
                .clone()
                .unwrap_or_else(|| self.welcome.clone()),
            course: overlay
                .course
                .clone()
                .unwrap_or_else(|| self.course.clone()),
            exclamation: overlay
                .exclamation
                .clone()
                .unwrap_or_else(|| self.exclamation.clone()),
        }
    }

    /// Apply command-line overrides (highest precedence).
    pub fn apply_overrides(&self, overrides: &RawSettings) -> Self {
        self.merge_with(overrides)
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_path` - Optional config file; must exist when given
    ///
    /// A missing global config is not an error.
    pub fn load(local_path: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), local_path)
    }

    /// Load settings from an explicit global config location.
    ///
    /// The global file is skipped when absent; the local file must exist.
    /// Environment variables are applied last.
    pub fn load_from(
        global_path: Option<&Path>,
        local_path: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        if let Some(local) = local_path {
            let local = expand_path(local);
            debug!("load: local config {}", local.display());
            let raw = load_raw_settings(&local)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        Ok(current)
    }

    /// Apply SCOPECHAIN_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(Environment::with_prefix("SCOPECHAIN"));

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("welcome") {
            settings.welcome = val;
        }
        if let Ok(val) = config.get_string("course") {
            settings.course = val;
        }
        if let Ok(val) = config.get_string("exclamation") {
            settings.exclamation = val;
        }

        Ok(settings)
    }

    /// The immutable value handed to the closure chain.
    pub fn greeting(&self) -> Greeting {
        Greeting::new(&self.welcome, &self.course, &self.exclamation)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# scopechain configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/scopechain/scopechain.toml
#   Local:  file passed with --config
#   Env:    SCOPECHAIN_WELCOME, SCOPECHAIN_COURSE, SCOPECHAIN_EXCLAMATION
#   CLI:    --welcome, --course, --exclamation

# Printed on every line
# welcome = "Welcome"

# Bound by the outermost unit, printed on lines 2-4
# course = "Holberton"

# Bound by the middle unit, printed on line 3 only
# exclamation = "!"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
