//! Initialize configuration and control panel in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing vitrine...");

    // Create default config
    let config_path = Path::new("vitrine.toml");
    if config_path.exists() && !yes {
        tracing::warn!("vitrine.toml already exists. Use --yes to overwrite.");
    } else {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write vitrine.toml")?;
        tracing::info!("Created vitrine.toml");
    }

    // Create the control panel page
    let panel_dir = Path::new("panel");
    if !panel_dir.exists() {
        fs::create_dir_all(panel_dir).context("Failed to create panel directory")?;
    }

    let index_path = panel_dir.join("index.html");
    if !index_path.exists() || yes {
        fs::write(&index_path, PANEL_INDEX).context("Failed to write panel/index.html")?;
        tracing::info!("Created panel/index.html");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Set a provider API key (e.g. OPENAI_API_KEY) and run 'vitrine serve'.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Vitrine Configuration

[server]
# Host and port for the build API and site server
host = "127.0.0.1"
port = 8787

# Directory with the control panel, served at /panel
panel_dir = "panel"

[site]
# Directory the generated site is written into
output = "site"

# Provider used when a build request names none
default_provider = "openai"

# Providers default to the built-in openai/anthropic/gemini set.
# Uncomment to override:
#
# [[providers]]
# id = "openai"
# endpoint = "https://api.openai.com/v1/responses"
# model = "gpt-4o-mini"
# api_key_env = "OPENAI_API_KEY"
"#;

const PANEL_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Vitrine Control Panel</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; }
    textarea { width: 100%; min-height: 6rem; font: inherit; padding: 0.5rem; }
    select, button { font: inherit; padding: 0.4rem 0.8rem; margin-top: 0.5rem; }
    #status { margin-top: 1rem; white-space: pre-wrap; }
    .ok { color: #15803d; }
    .err { color: #b91c1c; }
  </style>
</head>
<body>
  <h1>Vitrine</h1>
  <p>Describe the website you want, pick a provider, and build.</p>

  <textarea id="prompt" placeholder="A landing page for a small bakery..."></textarea>
  <div>
    <select id="provider"></select>
    <button id="build">Build site</button>
    <a href="/" target="_blank">View site</a>
  </div>
  <p id="status"></p>

  <script>
    const status = document.getElementById('status');
    const select = document.getElementById('provider');

    fetch('/api/providers')
      .then((r) => r.json())
      .then((data) => {
        for (const p of data.providers) {
          const opt = document.createElement('option');
          opt.value = p.id;
          opt.textContent = p.id + (p.keyConfigured ? '' : ' (no key: fallback)');
          select.appendChild(opt);
        }
      });

    document.getElementById('build').addEventListener('click', async () => {
      status.textContent = 'Building...';
      status.className = '';
      try {
        const res = await fetch('/api/build-site', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({
            prompt: document.getElementById('prompt').value,
            providerId: select.value,
          }),
        });
        const data = await res.json();
        if (res.ok) {
          status.className = 'ok';
          status.textContent = data.message;
        } else {
          status.className = 'err';
          status.textContent = data.error + (data.details ? '\n' + data.details : '');
        }
      } catch (e) {
        status.className = 'err';
        status.textContent = 'Request failed: ' + e;
      }
    });
  </script>
</body>
</html>
"#;
