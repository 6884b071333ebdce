//! Configuration management for java-precheck.
//!
//! Handles:
//! - Command-line argument parsing for the language server
//! - Settings file discovery and loading (`.java-precheck.toml`)
//! - Logger setup shared by both binaries

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::validation::{Dictionary, RuleOptions, Validator};

/// Settings file name looked up in the workspace root
pub const PROJECT_SETTINGS_FILE: &str = ".java-precheck.toml";

/// Command-line arguments for the language server
#[derive(Debug, Parser)]
#[command(name = "java-precheck-ls")]
#[command(about = "Language server for heuristic Java syntax checks")]
#[command(version)]
pub struct Args {
    /// Settings file to use instead of the discovered ones
    #[arg(long, help = "Path to a java-precheck TOML settings file")]
    pub config: Option<PathBuf>,

    /// Log level for the language server
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Contents of a settings file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub rules: RuleOptions,
    /// Extra misspellings: wrong spelling -> correction
    pub misspellings: HashMap<String, String>,
}

impl Settings {
    /// Read and parse a settings file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Settings file given explicitly on the command line
    pub explicit_settings: Option<PathBuf>,
    /// Settings file the effective settings came from, if any
    pub settings_path: Option<PathBuf>,
    pub settings: Settings,
    pub log_level: String,
}

impl Config {
    /// Create configuration from parsed arguments and the current directory
    pub fn from_args(args: Args) -> Result<Self> {
        let workspace = std::env::current_dir().context("Failed to read current directory")?;
        Self::load(args.config, &workspace, args.log_level)
    }

    /// Resolve settings: explicit file, then workspace file, then user-global file
    ///
    /// An explicit file must load. Discovered files that fail to parse are
    /// skipped with a warning.
    pub fn load(
        explicit_settings: Option<PathBuf>,
        workspace: &Path,
        log_level: impl Into<String>,
    ) -> Result<Self> {
        let (settings_path, settings) = match &explicit_settings {
            Some(path) => (Some(path.clone()), Settings::from_file(path)?),
            None => match discover_settings(workspace) {
                Some((path, settings)) => (Some(path), settings),
                None => (None, Settings::default()),
            },
        };

        Ok(Config {
            explicit_settings,
            settings_path,
            settings,
            log_level: log_level.into(),
        })
    }

    /// Re-resolve settings for a different workspace root
    ///
    /// An explicit settings file always wins, so it is kept as is.
    pub fn for_workspace(&self, workspace: &Path) -> Result<Self> {
        Self::load(
            self.explicit_settings.clone(),
            workspace,
            self.log_level.clone(),
        )
    }

    /// Build a validator from the effective settings
    pub fn validator(&self) -> Validator {
        let dictionary = Dictionary::builtin().with_additions(
            self.settings
                .misspellings
                .iter()
                .map(|(wrong, right)| (wrong.as_str(), right.clone())),
        );
        Validator::new(dictionary, self.settings.rules)
    }
}

/// Initialize `env_logger`, letting `RUST_LOG` override `log_level`
///
/// Must run before settings are resolved so discovery warnings are not lost.
pub fn init_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .init();
}

/// Settings file locations in lookup order
pub fn candidate_paths(workspace: &Path) -> Vec<PathBuf> {
    let mut paths = vec![workspace.join(PROJECT_SETTINGS_FILE)];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("java-precheck").join("config.toml"));
    }

    paths
}

fn discover_settings(workspace: &Path) -> Option<(PathBuf, Settings)> {
    for path in candidate_paths(workspace) {
        if !path.is_file() {
            continue;
        }

        match Settings::from_file(&path) {
            Ok(settings) => {
                log::info!("Using settings from {}", path.display());
                return Some((path, settings));
            }
            Err(e) => log::warn!("Ignoring settings file: {:#}", e),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_when_empty() {
        let settings: Settings = toml::from_str("").expect("parse empty settings");
        assert_eq!(settings, Settings::default());
        assert!(!settings.rules.next_line_braces);
    }

    #[test]
    fn test_settings_parse_rules_and_misspellings() {
        let settings: Settings = toml::from_str(
            r#"
[rules]
next_line_braces = true

[misspellings]
lenght = "length"
"#,
        )
        .expect("parse settings");

        assert!(settings.rules.next_line_braces);
        assert_eq!(
            settings.misspellings.get("lenght").map(String::as_str),
            Some("length")
        );
    }

    #[test]
    fn test_settings_reject_unknown_keys() {
        let parsed: std::result::Result<Settings, _> = toml::from_str("[rule]\nfoo = 1\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_candidate_paths_start_with_workspace() {
        let paths = candidate_paths(Path::new("/tmp/project"));
        assert_eq!(paths[0], Path::new("/tmp/project").join(PROJECT_SETTINGS_FILE));
    }

    #[test]
    fn test_validator_uses_configured_misspellings() {
        let mut settings = Settings::default();
        settings
            .misspellings
            .insert("Lenght".to_string(), "length".to_string());
        let config = Config {
            explicit_settings: None,
            settings_path: None,
            settings,
            log_level: "info".to_string(),
        };

        let validator = config.validator();
        assert_eq!(validator.dictionary().suggestion("lenght"), Some("length"));
    }
}
