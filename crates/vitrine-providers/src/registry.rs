//! Provider registry: descriptor lookup and default selection.

use crate::descriptor::{builtin_descriptors, ProviderDescriptor};

/// The configured provider set, fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    providers: Vec<ProviderDescriptor>,
    default_id: String,
}

/// Errors that can occur building the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("No providers configured")]
    Empty,

    #[error("Default provider '{0}' is not in the configured provider list")]
    UnknownDefault(String),

    #[error("Duplicate provider id '{0}'")]
    DuplicateId(String),
}

impl ProviderRegistry {
    /// Build a registry from a descriptor list and a default id.
    pub fn new(
        providers: Vec<ProviderDescriptor>,
        default_id: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let default_id = default_id.into();

        if providers.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (i, provider) in providers.iter().enumerate() {
            if providers[..i].iter().any(|p| p.id == provider.id) {
                return Err(RegistryError::DuplicateId(provider.id.clone()));
            }
        }
        if !providers.iter().any(|p| p.id == default_id) {
            return Err(RegistryError::UnknownDefault(default_id));
        }

        Ok(Self {
            providers,
            default_id,
        })
    }

    /// Registry of the built-in providers, defaulting to the first.
    pub fn builtin() -> Self {
        let providers = builtin_descriptors();
        let default_id = providers[0].id.clone();

        Self {
            providers,
            default_id,
        }
    }

    /// Look up a provider by id.
    pub fn get(&self, id: &str) -> Option<&ProviderDescriptor> {
        self.providers.iter().find(|p| p.id == id)
    }

    /// Resolve an optional requested id; `None` selects the default.
    pub fn resolve(&self, id: Option<&str>) -> Option<&ProviderDescriptor> {
        self.get(id.unwrap_or(&self.default_id))
    }

    /// The default provider id.
    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    /// All configured descriptors, in configuration order.
    pub fn descriptors(&self) -> &[ProviderDescriptor] {
        &self.providers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_defaults_to_first_provider() {
        let registry = ProviderRegistry::builtin();

        assert_eq!(registry.default_id(), "openai");
        assert_eq!(registry.descriptors().len(), 3);
    }

    #[test]
    fn resolves_none_to_the_default() {
        let registry = ProviderRegistry::builtin();

        let by_default = registry.resolve(None).unwrap();
        let by_name = registry.resolve(Some("openai")).unwrap();

        assert_eq!(by_default, by_name);
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        let registry = ProviderRegistry::builtin();

        assert!(registry.resolve(Some("does-not-exist")).is_none());
        assert!(registry.get("does-not-exist").is_none());
    }

    #[test]
    fn rejects_empty_provider_list() {
        let err = ProviderRegistry::new(vec![], "openai").unwrap_err();
        assert!(matches!(err, RegistryError::Empty));
    }

    #[test]
    fn rejects_default_not_in_list() {
        let err = ProviderRegistry::new(builtin_descriptors(), "mistral").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownDefault(id) if id == "mistral"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut providers = builtin_descriptors();
        providers.push(providers[0].clone());

        let err = ProviderRegistry::new(providers, "openai").unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId(id) if id == "openai"));
    }
}
