//! Site configuration (_config.yml)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration file name looked up in the site root
pub const CONFIG_FILE: &str = "_config.yml";

/// Errors raised while loading site configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub blog_dir: String,
    pub tag_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: "A personal portfolio and blog".to_string(),
            author: "Spencer Larsen".to_string(),

            url: "https://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content/blog".to_string(),
            public_dir: "public".to_string(),
            blog_dir: "blog".to_string(),
            tag_dir: "tags".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `_config.yml` from the site root, falling back to defaults
    /// when no such file exists
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self, ConfigError> {
        let path = base_dir.as_ref().join(CONFIG_FILE);
        if path.exists() {
            let config = Self::load(&path)?;
            tracing::debug!("Loaded configuration from {}", path.display());
            Ok(config)
        } else {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Portfolio");
        assert_eq!(config.author, "Spencer Larsen");
        assert_eq!(config.content_dir, "content/blog");
        assert_eq!(config.root, "/");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Site
author: Test User
content_dir: posts
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Site");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.content_dir, "posts");
        // Unspecified keys keep their defaults
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_load_or_default_without_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_or_default(tmp.path()).unwrap();
        assert_eq!(config.title, "Portfolio");
    }

    #[test]
    fn test_load_or_default_with_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "title: Configured\n").unwrap();
        let config = SiteConfig::load_or_default(tmp.path()).unwrap();
        assert_eq!(config.title, "Configured");
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "title: [broken\n").unwrap();
        assert!(SiteConfig::load_or_default(tmp.path()).is_err());
    }
}
