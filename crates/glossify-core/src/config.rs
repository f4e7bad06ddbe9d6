//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for Glossify.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, used for the index page title and heading.
    #[serde(default = "default_title")]
    pub title: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for the generated site.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Characters that delimit tokens when scanning definitions.
    #[serde(default = "default_separators")]
    pub separators: String,
}

// Default value functions
fn default_title() -> String {
    "Glossary".to_string()
}

fn default_output_dir() -> String {
    "site".to_string()
}

fn default_separators() -> String {
    " ,.".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: None,
            author: None,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            separators: default_separators(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            build: BuildConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration using the config crate for more flexibility.
    ///
    /// Values from the file can be overridden with `GLOSSIFY__`-prefixed
    /// environment variables, e.g. `GLOSSIFY__BUILD__OUTPUT_DIR`.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("GLOSSIFY").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.build.separators.is_empty() {
            return Err(CoreError::config("build.separators cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("glossify.toml");
        std::fs::write(&path, content).expect("write config");
        path
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_config(
            &dir,
            r#"
[site]
title = "Botany Glossary"
description = "Terms of the trade"
author = "A. Botanist"

[build]
output_dir = "dist"
separators = " ,.;"
"#,
        );

        let config = Config::load(&path).expect("load config");

        assert_eq!(config.site.title, "Botany Glossary");
        assert_eq!(config.site.description.as_deref(), Some("Terms of the trade"));
        assert_eq!(config.site.author.as_deref(), Some("A. Botanist"));
        assert_eq!(config.build.output_dir, "dist");
        assert_eq!(config.build.separators, " ,.;");
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_config(&dir, "");

        let config = Config::load(&path).expect("load config");

        assert_eq!(config.site.title, "Glossary");
        assert!(config.site.description.is_none());
        assert_eq!(config.build.output_dir, "site");
        assert_eq!(config.build.separators, " ,.");
    }

    #[test]
    fn test_config_validation_empty_title() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_config(
            &dir,
            r#"
[site]
title = ""
"#,
        );

        let result = Config::load(&path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_empty_separators() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_config(
            &dir,
            r#"
[build]
separators = ""
"#,
        );

        let result = Config::load(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/glossify.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            Config::load_or_default(Path::new("/nonexistent/glossify.toml")).expect("defaults");
        assert_eq!(config.site.title, "Glossary");
    }
}
