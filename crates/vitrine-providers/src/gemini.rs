//! Google Gemini generateContent adapter.
//!
//! Authentication is a `key` URL query parameter rather than a header,
//! and there is no separate system slot: the instruction and the prompt
//! are concatenated into a single text part. The reply lives at
//! `candidates[0].content.parts[].text`.

use serde_json::{json, Value};

use crate::adapter::{ProviderAdapter, SYSTEM_INSTRUCTION};
use crate::descriptor::ProviderDescriptor;

/// Provider family id.
pub const GEMINI: &str = "gemini";

/// Adapter for the Gemini generateContent API.
pub struct GeminiAdapter;

impl ProviderAdapter for GeminiAdapter {
    fn family(&self) -> &'static str {
        GEMINI
    }

    fn build_request(
        &self,
        client: &reqwest::Client,
        provider: &ProviderDescriptor,
        api_key: &str,
        prompt: &str,
    ) -> reqwest::RequestBuilder {
        let instruction = format!("{}\n\n{}", SYSTEM_INSTRUCTION, prompt);

        client
            .post(&provider.endpoint)
            .query(&[("key", api_key)])
            .json(&json!({
                "contents": [
                    { "parts": [ { "text": instruction } ] },
                ],
            }))
    }

    fn extract_reply(&self, envelope: &Value) -> Option<String> {
        let parts = envelope
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .as_array()?;

        for part in parts {
            if let Some(text) = part.get("text").and_then(Value::as_str) {
                return Some(text.to_string());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn provider() -> ProviderDescriptor {
        ProviderDescriptor {
            id: GEMINI.to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }

    #[test]
    fn request_authenticates_via_query_parameter() {
        let client = reqwest::Client::new();

        let request = GeminiAdapter
            .build_request(&client, &provider(), "AIza-test", "a bakery site")
            .build()
            .unwrap();

        assert_eq!(request.url().query(), Some("key=AIza-test"));
        assert!(request.headers().get("authorization").is_none());
        assert!(request.headers().get("x-api-key").is_none());
    }

    #[test]
    fn prompt_is_concatenated_with_the_instruction() {
        let client = reqwest::Client::new();

        let request = GeminiAdapter
            .build_request(&client, &provider(), "AIza-test", "a bakery site")
            .build()
            .unwrap();

        let body: Value =
            serde_json::from_slice(request.body().unwrap().as_bytes().unwrap()).unwrap();
        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();

        assert!(text.starts_with(SYSTEM_INSTRUCTION));
        assert!(text.ends_with("a bakery site"));
    }

    #[test]
    fn extracts_text_from_first_candidate() {
        let envelope = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "reply here" } ], "role": "model" } },
            ]
        });

        assert_eq!(GeminiAdapter.extract_reply(&envelope).unwrap(), "reply here");
    }

    #[test]
    fn empty_candidates_yield_none() {
        assert!(GeminiAdapter.extract_reply(&json!({ "candidates": [] })).is_none());
    }
}
