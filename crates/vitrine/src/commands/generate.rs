//! One-shot site generation, without starting the server.

use std::path::PathBuf;

use anyhow::Result;
use vitrine_providers::{dispatch, normalize};
use vitrine_site::{generate_fallback, SiteWriter};

use crate::config::load_config;

/// Run the generate command: resolve the provider, call it (or fall
/// back), normalize, and write the site once.
pub async fn run(
    config_path: PathBuf,
    prompt: String,
    provider_id: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let file = load_config(&config_path)?;
    let registry = file.registry()?;

    let provider = registry.resolve(provider_id.as_deref()).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown provider '{}'",
            provider_id.as_deref().unwrap_or_else(|| registry.default_id())
        )
    })?;

    let writer = SiteWriter::new(output.unwrap_or_else(|| PathBuf::from(&file.site.output)));

    let (assets, used_fallback) = match provider.credential() {
        Some(api_key) => {
            let client = reqwest::Client::new();
            let raw = dispatch(&client, provider, &api_key, &prompt).await?;
            (normalize(&raw)?, false)
        }
        None => {
            tracing::warn!(
                "No credential in {}; generating the fallback site",
                provider.api_key_env
            );
            (generate_fallback(&prompt), true)
        }
    };

    writer.write(&assets)?;

    tracing::info!(
        "Site written to {} (provider: {}, fallback: {})",
        writer.output_dir().display(),
        provider.id,
        used_fallback
    );

    Ok(())
}
