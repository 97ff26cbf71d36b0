//! Core data types for Picturebook.
//!
//! This crate provides the data model shared by every Picturebook crate:
//! identifiers handed out by the remote assistant service, conversation
//! messages, run status, and the story artifacts (outline, storyboard,
//! illustrations) produced by the pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ids;
mod image;
mod message;
mod outline;
mod persona;
mod role;
mod run;
mod storyboard;

pub use ids::{ConversationId, MessageId, PersonaId, RunId};
pub use image::{ImageRequest, ImageRequestBuilder, Illustration};
pub use message::{ContentPart, ThreadMessage};
pub use outline::Outline;
pub use persona::{PersonaSpec, PersonaSpecBuilder};
pub use role::Role;
pub use run::RunStatus;
pub use storyboard::{Page, Storyboard};
