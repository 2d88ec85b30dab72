//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    path::BLOG_PATH,
};

/// Main configuration structure for duopost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Content source settings.
    #[serde(default)]
    pub content: ContentConfig,

    /// Sitemap output settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Deployed site origin (e.g., "https://example.com").
    pub base_url: String,
}

/// Content source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding the markdown posts.
    #[serde(default = "default_blog_dir")]
    pub blog_dir: PathBuf,
}

/// Sitemap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// File the sitemap is written to.
    #[serde(default = "default_sitemap_output")]
    pub output: PathBuf,

    /// XSL stylesheet referenced from the sitemap for browser rendering.
    #[serde(default)]
    pub stylesheet: Option<String>,
}

fn default_blog_dir() -> PathBuf {
    PathBuf::from(BLOG_PATH)
}

fn default_sitemap_output() -> PathBuf {
    PathBuf::from("dist/sitemap.xml")
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            blog_dir: default_blog_dir(),
        }
    }
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            output: default_sitemap_output(),
            stylesheet: None,
        }
    }
}

impl Config {
    /// Build a configuration from a base URL, with default paths.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            site: SiteConfig {
                base_url: base_url.into(),
            },
            content: ContentConfig::default(),
            sitemap: SitemapConfig::default(),
        }
    }

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

    /// Load configuration from a file, overridden by `DUOPOST__*`
    /// environment variables (e.g. `DUOPOST__SITE__BASE_URL`).
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("DUOPOST").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.base_url.trim().is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Site origin without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }
}
