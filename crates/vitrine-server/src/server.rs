//! Server implementation: routes, handlers, and startup.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use vitrine_providers::{dispatch, normalize, ProviderRegistry};
use vitrine_site::{generate_fallback, SiteWriter};

use crate::api::{ApiError, BuildResponse, HealthResponse, ProviderInfo, ProvidersResponse};

/// Prompt used to seed the site at startup, so the root URL is never
/// empty before the first build request arrives.
const STARTUP_PROMPT: &str = "A welcome page introducing this prompt-to-website generator";

/// Configuration for the site server.
#[derive(Debug, Clone)]
pub struct SiteServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory with the control panel static files, served at /panel
    pub panel_dir: PathBuf,

    /// Open the control panel in a browser on start
    pub open: bool,
}

impl Default for SiteServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            panel_dir: PathBuf::from("panel"),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Startup initialization failed: {0}")]
    InitError(String),
}

/// Shared per-request state.
///
/// Everything here is immutable after startup; concurrent build
/// requests race on the output files with last-write-wins semantics,
/// and that is accepted behavior, not a gap to lock away.
pub struct ServerState {
    pub registry: ProviderRegistry,
    pub writer: SiteWriter,
    pub client: reqwest::Client,
}

/// The vitrine HTTP server.
pub struct SiteServer {
    config: SiteServerConfig,
    state: Arc<ServerState>,
}

impl SiteServer {
    /// Create a new server over a provider registry and a site writer.
    pub fn new(config: SiteServerConfig, registry: ProviderRegistry, writer: SiteWriter) -> Self {
        Self {
            config,
            state: Arc::new(ServerState {
                registry,
                writer,
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Seed the site and serve until the process is stopped.
    pub async fn start(self) -> Result<(), ServerError> {
        // One-time initialization: the only failure path that aborts
        // before serving.
        self.state
            .writer
            .write(&generate_fallback(STARTUP_PROMPT))
            .map_err(|e| ServerError::InitError(e.to_string()))?;

        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ServerError::InitError(e.to_string()))?;

        let app = router(Arc::clone(&self.state), &self.config.panel_dir);

        tracing::info!("Serving generated site at http://{}", addr);
        tracing::info!("Control panel at http://{}/panel/", addr);

        if self.config.open {
            let url = format!("http://{}/panel/", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Build the application router.
pub fn router(state: Arc<ServerState>, panel_dir: &std::path::Path) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/providers", get(list_providers))
        .route("/api/build-site", post(build_site))
        .nest_service("/panel", ServeDir::new(panel_dir))
        .fallback_service(ServeDir::new(state.writer.output_dir()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handler for `GET /api/health`.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        message: "vitrine is running".to_string(),
    })
}

/// Handler for `GET /api/providers`.
async fn list_providers(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let providers = state
        .registry
        .descriptors()
        .iter()
        .map(|p| ProviderInfo {
            id: p.id.clone(),
            endpoint: p.endpoint.clone(),
            model: p.model.clone(),
            api_key_env: p.api_key_env.clone(),
            key_configured: p.key_configured(),
        })
        .collect();

    Json(ProvidersResponse { providers })
}

/// Handler for `POST /api/build-site`.
///
/// The body is taken as a raw JSON value so a missing or non-string
/// prompt surfaces as our own 400 shape rather than an extractor
/// rejection.
async fn build_site(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<Value>,
) -> Result<Json<BuildResponse>, ApiError> {
    let prompt = match body.get("prompt") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => {
            return Err(ApiError::bad_request(
                "A non-empty 'prompt' string is required",
            ))
        }
    };

    // Only an absent (or null) providerId selects the default; an
    // explicitly supplied non-string id is a client error, not a
    // silent fallthrough to the default provider.
    let requested = match body.get("providerId") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(ApiError::bad_request(format!("Unknown provider '{}'", other)))
        }
    };

    let provider = state.registry.resolve(requested.as_deref()).ok_or_else(|| {
        let name = requested
            .as_deref()
            .unwrap_or_else(|| state.registry.default_id());
        ApiError::bad_request(format!("Unknown provider '{}'", name))
    })?;

    // Credential lookup is read-through: a key added or removed between
    // requests takes effect on the very next request.
    let (assets, used_fallback) = match provider.credential() {
        Some(api_key) => {
            let raw = dispatch(&state.client, provider, &api_key, &prompt)
                .await
                .map_err(|e| ApiError::internal("Site generation failed", e))?;

            let assets = normalize(&raw)
                .map_err(|e| ApiError::internal("Provider reply could not be parsed", e))?;

            (assets, false)
        }
        None => {
            tracing::info!(
                "No credential in {}; using the fallback generator",
                provider.api_key_env
            );
            (generate_fallback(&prompt), true)
        }
    };

    state
        .writer
        .write(&assets)
        .map_err(|e| ApiError::internal("Failed to write site", e))?;

    let message = if used_fallback {
        format!(
            "Site generated with the local fallback ({} has no key configured)",
            provider.api_key_env
        )
    } else {
        format!("Site generated with {}", provider.id)
    };

    Ok(Json(BuildResponse {
        message,
        provider: provider.id.clone(),
        used_fallback,
        website_url: "/".to_string(),
    }))
}
