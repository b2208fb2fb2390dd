//! Configuration file support for md2site CLI
//!
//! Loads settings from `_md2site.toml`, looked up in the articles directory
//! unless a path is given with `--config`.

use anyhow::{Context, Result};
use md2site_site::SiteInfo;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "_md2site.toml";

/// Schema URL for the configuration file
pub const SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/md2site/md2site/main/crates/md2site-cli/schema/md2site.schema.json";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Site-wide metadata
    #[serde(skip_serializing_if = "SiteConfig::is_empty")]
    pub site: SiteConfig,
    /// Output configuration
    #[serde(skip_serializing_if = "OutputConfig::is_empty")]
    pub output: OutputConfig,
    /// Build configuration
    #[serde(skip_serializing_if = "BuildConfig::is_empty")]
    pub build: BuildConfig,
}

/// Site-wide metadata
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name used in page titles and og:site_name (default: "Knowledge Base")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Absolute base URL for canonical links and the sitemap (default: "https://example.com")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Language tag for `<html lang>`, interface strings and dates: "en" or "ru" (default: "en")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Open Graph locale (default: "en_US")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Home page description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Home page keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Page title template, `%s` is replaced by the page title (default: "%s | {name}")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_template: Option<String>,
}

impl SiteConfig {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.base_url.is_none()
            && self.language.is_none()
            && self.locale.is_none()
            && self.description.is_none()
            && self.keywords.is_none()
            && self.title_template.is_none()
    }

    /// Merge onto the default site metadata
    pub fn to_site_info(&self) -> SiteInfo {
        let defaults = SiteInfo::default();
        SiteInfo {
            name: self.name.clone().unwrap_or(defaults.name),
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            language: self.language.clone().unwrap_or(defaults.language),
            locale: self.locale.clone().unwrap_or(defaults.locale),
            description: self.description.clone().unwrap_or(defaults.description),
            keywords: self.keywords.clone().unwrap_or(defaults.keywords),
            title_template: self.title_template.clone().or(defaults.title_template),
        }
    }
}

/// Output configuration
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory, relative to the working directory (default: "_site")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Write sitemap.xml (default: true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<bool>,
    /// Write articles.json with the article listing (default: false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_json: Option<bool>,
    /// Escape `<`, `>` and `&` in article bodies (default: false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape_html: Option<bool>,
}

impl OutputConfig {
    fn is_empty(&self) -> bool {
        self.dir.is_none()
            && self.sitemap.is_none()
            && self.index_json.is_none()
            && self.escape_html.is_none()
    }
}

/// Build configuration
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct BuildConfig {
    /// Number of parallel jobs (default: number of CPUs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
    /// Look for articles in subdirectories (default: false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
}

impl BuildConfig {
    fn is_empty(&self) -> bool {
        self.jobs.is_none() && self.recursive.is_none()
    }
}

impl Config {
    /// Load configuration from a specific file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Try to load configuration from a directory (looks for `_md2site.toml`)
    ///
    /// Returns `Ok(None)` if the config file doesn't exist.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Generate JSON schema for the configuration
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Generate JSON schema as a string
    pub fn json_schema_string() -> Result<String> {
        let schema = Self::json_schema();
        serde_json::to_string_pretty(&schema).context("Failed to serialize JSON schema")
    }

    /// Serialize configuration to TOML string with schema directive
    pub fn to_toml_with_schema(&self) -> Result<String> {
        let toml_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        Ok(format!("#:schema {}\n\n{}", SCHEMA_URL, toml_content))
    }

    /// Create a sample configuration for the init command
    pub fn sample() -> Self {
        Config {
            site: SiteConfig {
                name: Some("Knowledge Base".to_string()),
                base_url: Some("https://example.com".to_string()),
                language: Some("en".to_string()),
                locale: Some("en_US".to_string()),
                description: Some("Practical guides and how-tos".to_string()),
                keywords: Some(vec!["guides".to_string(), "how-to".to_string()]),
                title_template: None, // "%s | {name}"
            },
            output: OutputConfig {
                dir: Some(PathBuf::from("_site")),
                sitemap: Some(true),
                index_json: Some(false),
                escape_html: Some(false),
            },
            build: BuildConfig {
                jobs: None, // all CPUs
                recursive: Some(false),
            },
        }
    }
}
