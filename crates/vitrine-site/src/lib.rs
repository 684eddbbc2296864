//! Site assets, fallback generation, and the on-disk site writer.
//!
//! A generated site is exactly three text assets: a markup fragment, a
//! stylesheet, and a script. This crate defines that shape, produces a
//! credential-free fallback version of it, and persists it to disk.

pub mod assets;
pub mod fallback;
pub mod writer;

pub use assets::SiteAssets;
pub use fallback::generate_fallback;
pub use writer::{SiteWriter, WriteError};
