//! Approval-gated story authoring for Picturebook.
//!
//! A [`StoryPipeline`] walks one conversation with the remote persona
//! through three stages: an outline, the full story, and a storyboard of
//! pages with illustration prompts. The human approves every stage before
//! the next one starts; a rejected draft is simply requested again.
//!
//! # Architecture
//!
//! - [`ConversationSession`] posts turns, waits for runs and drains new replies
//! - [`StageRunner`] loops a stage until approval, then runs its extractor
//! - [`extract_json`] and friends pull structured results out of replies
//! - [`generate_images`] illustrates an approved storyboard page by page

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod illustration;
mod pipeline;
mod prompts;
mod session;
mod stage;

pub use extraction::{
    extract_json, extract_json_lenient, extract_outline, extract_storyboard, parse_json,
};
pub use illustration::{generate_images, illustrations_key, save_illustrations};
pub use pipeline::{StoryOutcome, StoryPipeline, load_storyboard};
pub use prompts::{
    AUDIENCE_LABEL, OUTLINE_STAGE, STORY_PROMPT, STORY_STAGE, STORYBOARD_PROMPT,
    STORYBOARD_STAGE, TOPIC_LABEL, confirm_label, outline_prompt,
};
pub use session::ConversationSession;
pub use stage::{StageRunner, StageSpec};
