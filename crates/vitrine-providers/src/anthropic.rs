//! Anthropic Messages API adapter.
//!
//! Authentication is a custom `x-api-key` header plus the required
//! `anthropic-version` header; the system instruction travels in a
//! dedicated `system` field next to the `messages` array. The text
//! reply lives at `content[].text` in the response envelope.

use serde_json::{json, Value};

use crate::adapter::{ProviderAdapter, SYSTEM_INSTRUCTION};
use crate::descriptor::ProviderDescriptor;

/// Provider family id.
pub const ANTHROPIC: &str = "anthropic";

const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4096;

/// Adapter for the Anthropic Messages API.
pub struct AnthropicAdapter;

impl ProviderAdapter for AnthropicAdapter {
    fn family(&self) -> &'static str {
        ANTHROPIC
    }

    fn build_request(
        &self,
        client: &reqwest::Client,
        provider: &ProviderDescriptor,
        api_key: &str,
        prompt: &str,
    ) -> reqwest::RequestBuilder {
        client
            .post(&provider.endpoint)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&json!({
                "model": provider.model,
                "max_tokens": MAX_TOKENS,
                "system": SYSTEM_INSTRUCTION,
                "messages": [
                    { "role": "user", "content": prompt },
                ],
            }))
    }

    fn extract_reply(&self, envelope: &Value) -> Option<String> {
        for part in envelope.get("content")?.as_array()? {
            if let Some(text) = part.get("text").and_then(Value::as_str) {
                return Some(text.to_string());
            }
        }
        None
    }
}
