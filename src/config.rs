//! Configuration handling for fastapi-helper.
//! This module loads the optional workspace configuration file whose values
//! become the defaults offered by the scaffolding prompts.

use crate::constants::{
    CONFIG_FILES, DEFAULT_DEPENDENCIES, DEFAULT_DESCRIPTION, DEFAULT_MIRROR_URL,
};
use crate::error::{Error, Result};
use crate::workspace::PackageTool;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default answers for the database prompts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "fastapi".to_string(),
        }
    }
}

/// Workspace configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Preselected package tool for new projects
    pub tool: Option<PackageTool>,
    pub description: String,
    /// Preselected answer for the mirror question
    pub use_mirror: bool,
    pub mirror_url: String,
    pub dependencies: Vec<String>,
    pub templates_dir: Option<PathBuf>,
    pub database: DatabaseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: None,
            description: DEFAULT_DESCRIPTION.to_string(),
            use_mirror: false,
            mirror_url: DEFAULT_MIRROR_URL.to_string(),
            dependencies: DEFAULT_DEPENDENCIES.iter().map(|d| d.to_string()).collect(),
            templates_dir: None,
            database: DatabaseConfig::default(),
        }
    }
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads the first configuration file found in `workspace`.
/// Returns the defaults when no file exists.
///
/// # Errors
/// * `Error::ConfigError` if the file found cannot be parsed
pub fn get_config<P: AsRef<Path>>(workspace: P) -> Result<Config> {
    for file in CONFIG_FILES {
        let config_path = workspace.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            return parse_config(&content);
        }
    }

    debug!("No configuration file found (tried: {}), using defaults", CONFIG_FILES.join(", "));
    Ok(Config::default())
}
