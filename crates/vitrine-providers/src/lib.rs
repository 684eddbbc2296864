//! Provider dispatch and response normalization.
//!
//! Each supported AI provider differs only in its authentication shape,
//! request envelope, and the JSON path of the text reply inside the
//! response envelope. Those differences live in one adapter per provider
//! family; everything else (sending the request, checking the status,
//! extracting the reply, normalizing it into site assets) is shared.

pub mod adapter;
pub mod anthropic;
pub mod descriptor;
pub mod gemini;
pub mod normalize;
pub mod openai;
pub mod registry;

pub use adapter::{adapter_for, dispatch, DispatchError, ProviderAdapter, SYSTEM_INSTRUCTION};
pub use descriptor::{builtin_descriptors, ProviderDescriptor};
pub use normalize::{normalize, NormalizeError};
pub use registry::{ProviderRegistry, RegistryError};
