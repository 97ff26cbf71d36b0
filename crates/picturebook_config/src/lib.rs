//! Configuration for Picturebook.
//!
//! Configuration is layered with the `config` crate:
//! 1. Bundled defaults (`picturebook.toml` at the workspace root)
//! 2. `~/.config/picturebook/picturebook.toml` (optional)
//! 3. `./picturebook.toml` (optional)
//! 4. `PICTUREBOOK__SECTION__KEY` environment variables
//!
//! Later sources override earlier ones.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;

pub use settings::{
    ApiConfig, ImageConfig, OutlineFormat, PersonaConfig, PicturebookConfig, PipelineConfig,
    SessionConfig, StorageConfig,
};
