//! Locating and loading the configuration file.
//!
//! The first match wins:
//!
//! 1. `--config` flag (explicit path)
//! 2. `asterisk-lint.toml` or `.asterisk-lint.toml` in the analyzed directory
//! 3. `config.toml` in the global directory (`$ASTERISK_LINT_CONFIG_DIR`,
//!    else `~/.asterisk-lint/`)
//! 4. Built-in defaults

use anyhow::{Context, Result};
use asterisk_lint_core::Config;
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found next to the analyzed sources.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }
}

const PROJECT_CONFIG_NAMES: &[&str] = &["asterisk-lint.toml", ".asterisk-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

const CONFIG_DIR_ENV: &str = "ASTERISK_LINT_CONFIG_DIR";

/// Resolves which configuration file applies to `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_in(project_dir, explicit, global_config_dir())
}

/// Loads the configuration named by `source`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        tracing::debug!("No configuration file found, using defaults");
        return Ok(Config::default());
    };

    if let ConfigSource::Global(p) = source {
        tracing::info!("Using global config: {}", p.display());
    }

    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

fn resolve_in(project_dir: &Path, explicit: Option<&Path>, global_dir: Option<PathBuf>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.exists())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match global_dir.map(|dir| dir.join(GLOBAL_CONFIG_NAME)) {
        Some(candidate) if candidate.exists() => {
            tracing::debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        }
        _ => ConfigSource::Default,
    }
}

/// The global config directory: `$ASTERISK_LINT_CONFIG_DIR`, else `~/.asterisk-lint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".asterisk-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins_without_existence_check() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("asterisk-lint.toml"), "").unwrap();

        let result = resolve_in(project.path(), Some(Path::new("/missing.toml")), None);
        assert_eq!(result, ConfigSource::Explicit(PathBuf::from("/missing.toml")));
    }

    #[test]
    fn plain_name_preferred_over_dotfile() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("asterisk-lint.toml"), "").unwrap();
        fs::write(project.path().join(".asterisk-lint.toml"), "").unwrap();

        let result = resolve_in(project.path(), None, None);
        assert_eq!(
            result,
            ConfigSource::Project(project.path().join("asterisk-lint.toml"))
        );
    }

    #[test]
    fn dotfile_found_alone() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(".asterisk-lint.toml"), "").unwrap();

        let result = resolve_in(project.path(), None, None);
        assert_eq!(
            result,
            ConfigSource::Project(project.path().join(".asterisk-lint.toml"))
        );
    }

    #[test]
    fn global_used_only_without_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let result = resolve_in(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Global(global.path().join("config.toml")));

        fs::write(project.path().join("asterisk-lint.toml"), "").unwrap();
        let result = resolve_in(project.path(), None, Some(global.path().to_path_buf()));
        assert!(matches!(result, ConfigSource::Project(_)));
    }

    #[test]
    fn empty_global_dir_falls_back_to_defaults() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();

        let result = resolve_in(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());
    }

    #[test]
    fn load_reads_rule_options() {
        let project = TempDir::new().unwrap();
        let path = project.path().join("asterisk-lint.toml");
        fs::write(&path, "[rules.leading-asterisk-align]\noffset = 1\n").unwrap();

        let config = load(&ConfigSource::Project(path)).unwrap();
        assert_eq!(
            config.rule("leading-asterisk-align").unwrap().get_int("offset", 0),
            1
        );
    }

    #[test]
    fn load_reports_missing_explicit_file() {
        let err = load(&ConfigSource::Explicit(PathBuf::from("/missing/asterisk-lint.toml")))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn load_defaults_without_file() {
        let config = load(&ConfigSource::Default).unwrap();
        assert!(config.rules.is_empty());
    }
}
