use crate::services::slug::validate_slug;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub slug: SlugConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Characters of stripped content kept when an excerpt is derived.
    #[serde(default = "default_excerpt_length")]
    pub excerpt_length: usize,
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: usize,
    /// Insert the sample posts when the store is empty.
    #[serde(default = "default_true")]
    pub seed_samples: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            excerpt_length: default_excerpt_length(),
            words_per_minute: default_words_per_minute(),
            seed_samples: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlugConfig {
    /// Write attempts before a save gives up on a contested slug.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Used when a title produces no slug characters at all.
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            fallback: default_fallback(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_pool_size() -> u32 {
    10
}

fn default_excerpt_length() -> usize {
    150
}

fn default_words_per_minute() -> usize {
    200
}

fn default_max_attempts() -> u32 {
    5
}

fn default_fallback() -> String {
    "untitled".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Run `blogcraft init` first?",
                path.display(),
                e
            )
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration for a fresh site, as written by `blogcraft init`.
    pub fn new_site(name: &str) -> Self {
        Self {
            site: SiteConfig {
                title: name.to_string(),
                description: "A modern blog platform with rich content".to_string(),
            },
            server: ServerConfig::default(),
            database: DatabaseConfig {
                path: "./data/blogcraft.db".to_string(),
                pool_size: default_pool_size(),
            },
            content: ContentConfig::default(),
            slug: SlugConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.pool_size == 0 {
            anyhow::bail!("database.pool_size must be greater than 0");
        }
        if self.content.excerpt_length == 0 {
            anyhow::bail!("content.excerpt_length must be greater than 0");
        }
        if self.content.excerpt_length > 10000 {
            anyhow::bail!("content.excerpt_length must be 10000 or less");
        }
        if self.content.words_per_minute == 0 {
            anyhow::bail!("content.words_per_minute must be greater than 0");
        }
        if self.slug.max_attempts == 0 || self.slug.max_attempts > 100 {
            anyhow::bail!("slug.max_attempts must be between 1 and 100");
        }
        if !validate_slug(&self.slug.fallback) {
            anyhow::bail!(
                "slug.fallback '{}' is not a valid slug (lowercase letters, numbers, hyphens)",
                self.slug.fallback
            );
        }
        Ok(())
    }
}
