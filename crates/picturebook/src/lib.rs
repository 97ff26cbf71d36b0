//! Picturebook - co-author illustrated children's stories.
//!
//! Picturebook walks a remote LLM persona through three approval-gated
//! stages (outline, story, storyboard), saves the approved storyboard as
//! JSON and optionally illustrates every page.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use picturebook::{
//!     ConsoleApprovalSurface, FileSystemStoryboardStore, OpenAIClient, PicturebookConfig,
//!     StoryPipeline,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PicturebookConfig::load()?;
//!     let client = OpenAIClient::from_env(config.api().api_key_env(), config.api().base_url())?;
//!     let store = FileSystemStoryboardStore::new(config.storage().path())?;
//!     let surface = ConsoleApprovalSurface::stdio();
//!
//!     let outcome = StoryPipeline::new(&client, &surface, &store, &config).run().await?;
//!     println!("Saved storyboard {}", outcome.storyboard_id());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Picturebook is organized as a workspace with focused crates:
//!
//! - `picturebook_error` - Error types
//! - `picturebook_core` - Data model (ids, messages, storyboards)
//! - `picturebook_interface` - Backend and approval surface traits
//! - `picturebook_config` - Layered TOML configuration
//! - `picturebook_storage` - Storyboard persistence
//! - `picturebook_models` - OpenAI client
//! - `picturebook_narrative` - Session, stages and pipeline
//!
//! This crate re-exports everything for convenience and adds the console
//! approval surface and logging setup used by the `picturebook` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod console;
mod logging;

pub use console::{ConsoleApprovalSurface, is_approval};
pub use logging::{LoggingConfig, init_logging};

pub use picturebook_config::*;
pub use picturebook_core::*;
pub use picturebook_error::*;
pub use picturebook_interface::*;
pub use picturebook_models::OpenAIClient;
pub use picturebook_narrative::*;
pub use picturebook_storage::{FileSystemStoryboardStore, StoryboardStore, new_storyboard_id};
