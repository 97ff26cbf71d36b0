//! Test doubles for the narrative crate.

#![allow(dead_code)]

mod mock_assistant;
mod mock_images;
mod scripted_surface;

pub use mock_assistant::{MockAssistant, RunBehavior, SetupFailure};
pub use mock_images::{MockImages, MockImageResponse};
pub use scripted_surface::ScriptedSurface;

use picturebook_config::{PicturebookConfig, SessionConfig};

/// Bundled configuration with fast polling and a storage dir under `dir`.
pub fn test_config(dir: &std::path::Path) -> PicturebookConfig {
    PicturebookConfig::defaults()
        .expect("bundled configuration is valid")
        .with_session(SessionConfig::new(1, 200))
        .with_storage_path(dir)
}
