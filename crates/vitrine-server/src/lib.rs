//! HTTP server for vitrine.
//!
//! Exposes the build API, serves the control panel under `/panel`, and
//! serves the generated site from the process root.

pub mod api;
pub mod server;

pub use api::ApiError;
pub use server::{SiteServer, SiteServerConfig, ServerError, ServerState};
