//! Configuration file loading (vitrine.toml).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use vitrine_providers::{builtin_descriptors, ProviderDescriptor, ProviderRegistry};

/// Configuration file structure (vitrine.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub site: SiteSection,

    /// Provider list; the built-in three families when omitted.
    #[serde(default)]
    pub providers: Vec<ProviderDescriptor>,
}

#[derive(Debug, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_panel_dir")]
    pub panel_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_output")]
    pub output: String,

    /// Provider used when a build request names none. Defaults to the
    /// first provider in the list.
    pub default_provider: Option<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            panel_dir: default_panel_dir(),
        }
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            output: default_output(),
            default_provider: None,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8787
}
fn default_panel_dir() -> String {
    "panel".to_string()
}
fn default_output() -> String {
    "site".to_string()
}

impl ConfigFile {
    /// Build the provider registry this configuration describes.
    pub fn registry(&self) -> Result<ProviderRegistry> {
        let providers = if self.providers.is_empty() {
            builtin_descriptors()
        } else {
            self.providers.clone()
        };

        let default_id = self
            .site
            .default_provider
            .clone()
            .unwrap_or_else(|| providers[0].id.clone());

        Ok(ProviderRegistry::new(providers, default_id)?)
    }
}

/// Load configuration from the given path if it exists.
/// Returns an error if the file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
