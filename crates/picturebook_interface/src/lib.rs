//! Trait definitions for Picturebook.
//!
//! This crate defines the collaborator contracts the story pipeline is
//! written against: the remote assistant service, the remote image
//! service, and the human-facing approval surface.

mod traits;

pub use traits::{ApprovalSurface, AssistantBackend, ImageBackend};
