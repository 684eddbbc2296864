//! Provider descriptors and credential lookup.

use serde::{Deserialize, Serialize};

/// Static description of one configured provider.
///
/// Loaded once at startup and immutable for the process lifetime. The
/// credential itself is never stored here: only the name of the
/// environment variable holding it, so adding or removing a key takes
/// effect on the very next request without a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    /// Unique provider id, also the adapter lookup key (e.g. "openai").
    pub id: String,

    /// Endpoint URL the request is posted to.
    pub endpoint: String,

    /// Model identifier sent in the request envelope.
    pub model: String,

    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl ProviderDescriptor {
    /// Read the credential from the environment, fresh on every call.
    ///
    /// An unset or blank variable counts as unconfigured, which selects
    /// the fallback generation path rather than an error.
    pub fn credential(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }

    /// Whether the named environment variable currently holds a value.
    pub fn key_configured(&self) -> bool {
        self.credential().is_some()
    }
}

/// The built-in provider list, used when no configuration overrides it.
pub fn builtin_descriptors() -> Vec<ProviderDescriptor> {
    vec![
        ProviderDescriptor {
            id: crate::openai::OPENAI.to_string(),
            endpoint: "https://api.openai.com/v1/responses".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
        },
        ProviderDescriptor {
            id: crate::anthropic::ANTHROPIC.to_string(),
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
        },
        ProviderDescriptor {
            id: crate::gemini::GEMINI.to_string(),
            endpoint:
                "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
                    .to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_list_covers_three_families() {
        let ids: Vec<String> = builtin_descriptors().into_iter().map(|p| p.id).collect();

        assert_eq!(ids, vec!["openai", "anthropic", "gemini"]);
    }

    #[test]
    fn blank_env_var_counts_as_unconfigured() {
        let provider = ProviderDescriptor {
            id: "test".to_string(),
            endpoint: "https://example.com".to_string(),
            model: "test-model".to_string(),
            api_key_env: "VITRINE_TEST_BLANK_KEY".to_string(),
        };

        std::env::set_var("VITRINE_TEST_BLANK_KEY", "   ");
        assert!(!provider.key_configured());

        std::env::set_var("VITRINE_TEST_BLANK_KEY", "sk-real");
        assert_eq!(provider.credential().as_deref(), Some("sk-real"));

        std::env::remove_var("VITRINE_TEST_BLANK_KEY");
        assert!(provider.credential().is_none());
    }

    #[test]
    fn descriptor_round_trips_through_toml() {
        let provider = builtin_descriptors().remove(0);

        let text = toml::to_string(&provider).unwrap();
        let back: ProviderDescriptor = toml::from_str(&text).unwrap();

        assert_eq!(back, provider);
    }
}
