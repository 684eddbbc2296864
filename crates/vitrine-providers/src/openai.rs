//! OpenAI Responses API adapter.
//!
//! Bearer-token authentication; the system instruction and the prompt
//! travel together in a single `input` array. The text reply lives at
//! `output[].content[].text` in the response envelope.

use serde_json::{json, Value};

use crate::adapter::{ProviderAdapter, SYSTEM_INSTRUCTION};
use crate::descriptor::ProviderDescriptor;

/// Provider family id.
pub const OPENAI: &str = "openai";

/// Adapter for the OpenAI Responses API.
pub struct OpenAiAdapter;

impl ProviderAdapter for OpenAiAdapter {
    fn family(&self) -> &'static str {
        OPENAI
    }

    fn build_request(
        &self,
        client: &reqwest::Client,
        provider: &ProviderDescriptor,
        api_key: &str,
        prompt: &str,
    ) -> reqwest::RequestBuilder {
        client.post(&provider.endpoint).bearer_auth(api_key).json(&json!({
            "model": provider.model,
            "input": [
                { "role": "system", "content": SYSTEM_INSTRUCTION },
                { "role": "user", "content": prompt },
            ],
        }))
    }

    fn extract_reply(&self, envelope: &Value) -> Option<String> {
        // The output array can carry non-message items (e.g. reasoning);
        // take the first content part that holds text.
        for item in envelope.get("output")?.as_array()? {
            if let Some(parts) = item.get("content").and_then(Value::as_array) {
                for part in parts {
                    if let Some(text) = part.get("text").and_then(Value::as_str) {
                        return Some(text.to_string());
                    }
                }
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
            id: OPENAI.to_string(),
            endpoint: "https://api.openai.com/v1/responses".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }

    #[test]
    fn request_uses_bearer_auth_and_input_array() {
        let client = reqwest::Client::new();

        let request = OpenAiAdapter
            .build_request(&client, &provider(), "sk-test", "a bakery site")
            .build()
            .unwrap();

        assert_eq!(request.method().as_str(), "POST");
        assert_eq!(request.url().as_str(), "https://api.openai.com/v1/responses");
        assert_eq!(
            request
                .headers()
                .get("authorization")
                .unwrap()
                .to_str()
                .unwrap(),
            "Bearer sk-test"
        );

        let body: Value =
            serde_json::from_slice(request.body().unwrap().as_bytes().unwrap()).unwrap();
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["input"][0]["role"], "system");
        assert_eq!(body["input"][1]["content"], "a bakery site");
    }

    #[test]
    fn extracts_text_from_output_content() {
        let envelope = json!({
            "output": [
                { "type": "reasoning", "summary": [] },
                { "type": "message", "content": [ { "type": "output_text", "text": "{\"html\":\"x\"}" } ] },
            ]
        });

        let reply = OpenAiAdapter.extract_reply(&envelope).unwrap();
        assert_eq!(reply, "{\"html\":\"x\"}");
    }

    #[test]
    fn missing_output_yields_none() {
        assert!(OpenAiAdapter.extract_reply(&json!({ "id": "resp_1" })).is_none());
        assert!(OpenAiAdapter.extract_reply(&json!({ "output": [] })).is_none());
    }
}
