//! Server command.

use std::path::PathBuf;

use anyhow::Result;
use vitrine_server::{SiteServer, SiteServerConfig};
use vitrine_site::SiteWriter;

use crate::config::load_config;

/// Run the serve command.
pub async fn run(config_path: PathBuf, port: Option<u16>, open: bool) -> Result<()> {
    let file = load_config(&config_path)?;
    let registry = file.registry()?;
    let writer = SiteWriter::new(&file.site.output);

    let server_config = SiteServerConfig {
        host: file.server.host.clone(),
        port: port.unwrap_or(file.server.port),
        panel_dir: PathBuf::from(&file.server.panel_dir),
        open,
    };

    tracing::info!(
        "Starting server with {} provider(s), default '{}'",
        registry.descriptors().len(),
        registry.default_id()
    );

    SiteServer::new(server_config, registry, writer).start().await?;

    Ok(())
}
