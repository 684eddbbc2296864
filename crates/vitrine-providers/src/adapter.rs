//! Adapter trait and the shared dispatch path.

use serde_json::Value;

use crate::anthropic::AnthropicAdapter;
use crate::descriptor::ProviderDescriptor;
use crate::gemini::GeminiAdapter;
use crate::openai::OpenAiAdapter;

/// Fixed system instruction sent to every provider.
///
/// Demands a bare JSON object with exactly the three asset fields; the
/// normalizer still tolerates fences and prose because models ignore
/// this more often than one would hope.
pub const SYSTEM_INSTRUCTION: &str = "You are a website generator. Respond with strictly \
valid JSON and nothing else: a single object with exactly three non-empty string fields. \
\"html\" is a body fragment for the page (no <html>, <head>, or <body> tags), \"css\" is a \
complete stylesheet for it, and \"js\" is a script the page loads. Do not wrap the JSON in \
markdown code fences and do not add any commentary before or after it.";

/// Trait for provider-specific request and response shapes.
///
/// One implementation per provider family. Adding a fourth provider
/// means adding one variant here and one arm in [`adapter_for`], not
/// editing a conditional chain.
pub trait ProviderAdapter: Send + Sync {
    /// Provider family identifier (e.g. "openai").
    fn family(&self) -> &'static str;

    /// Build the provider-specific HTTP request: authentication shape
    /// plus request envelope.
    fn build_request(
        &self,
        client: &reqwest::Client,
        provider: &ProviderDescriptor,
        api_key: &str,
        prompt: &str,
    ) -> reqwest::RequestBuilder;

    /// Pull the raw text reply out of the provider's response envelope.
    ///
    /// Returns `None` when the envelope does not contain the expected
    /// text-bearing path.
    fn extract_reply(&self, envelope: &Value) -> Option<String>;
}

/// Look up the adapter for a provider id.
pub fn adapter_for(id: &str) -> Option<&'static dyn ProviderAdapter> {
    match id {
        crate::openai::OPENAI => Some(&OpenAiAdapter),
        crate::anthropic::ANTHROPIC => Some(&AnthropicAdapter),
        crate::gemini::GEMINI => Some(&GeminiAdapter),
        _ => None,
    }
}

/// Errors that can occur during dispatch.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The id passed selection but no adapter exists for it. This is a
    /// configuration gap, not a bad request.
    #[error("No adapter implemented for provider '{0}'")]
    UnsupportedProvider(String),

    #[error("Request to {provider} failed: {message}")]
    Request { provider: String, message: String },

    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Unexpected {provider} response shape: no text reply found")]
    MissingReply { provider: String },
}

/// Call the provider and return its raw text reply.
///
/// No timeout, no retry: a failure surfaces immediately as a single
/// failed request, and the raw reply is handed to the normalizer
/// unmodified.
pub async fn dispatch(
    client: &reqwest::Client,
    provider: &ProviderDescriptor,
    api_key: &str,
    prompt: &str,
) -> Result<String, DispatchError> {
    let adapter = adapter_for(&provider.id)
        .ok_or_else(|| DispatchError::UnsupportedProvider(provider.id.clone()))?;

    tracing::info!("Dispatching prompt to {} ({})", provider.id, provider.model);

    let response = adapter
        .build_request(client, provider, api_key, prompt)
        .send()
        .await
        .map_err(|e| DispatchError::Request {
            provider: provider.id.clone(),
            message: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(DispatchError::Status {
            provider: provider.id.clone(),
            status: status.as_u16(),
            body: truncate(&body, 300),
        });
    }

    let envelope: Value = response.json().await.map_err(|e| DispatchError::Request {
        provider: provider.id.clone(),
        message: e.to_string(),
    })?;

    adapter
        .extract_reply(&envelope)
        .ok_or_else(|| DispatchError::MissingReply {
            provider: provider.id.clone(),
        })
}

/// Cap upstream error bodies carried into error messages.
fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        text.to_string()
    } else {
        let cut = text
            .char_indices()
            .take_while(|(i, _)| *i <= max)
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        format!("{}…", &text[..cut])
    }
}
