//! OpenAI API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use picturebook_core::Role;
use serde::{Deserialize, Serialize};

/// Body of `POST /assistants`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateAssistantRequest {
    /// Assistant name
    pub name: String,
    /// System instructions
    pub instructions: String,
    /// Model identifier
    pub model: String,
}

/// Body of `POST /threads/{thread_id}/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateMessageRequest {
    /// Author role
    pub role: Role,
    /// Message text
    pub content: String,
}

/// Body of `POST /threads/{thread_id}/runs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRunRequest {
    /// Assistant answering the thread
    pub assistant_id: String,
}

/// Any API object where only the identifier matters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ObjectRef {
    pub(crate) id: String,
}

/// Run status as reported on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireRunStatus {
    /// Waiting to start
    Queued,
    /// Producing output
    InProgress,
    /// Waiting for tool outputs
    RequiresAction,
    /// Cancellation requested
    Cancelling,
    /// Cancelled
    Cancelled,
    /// Failed
    Failed,
    /// Finished
    Completed,
    /// Ended early (token limits)
    Incomplete,
    /// Not finished in time
    Expired,
    /// A status this client does not know
    #[serde(other)]
    Unknown,
}

/// Run object returned by create and retrieve.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct RunObject {
    /// Run identifier
    id: String,
    /// Current status
    status: WireRunStatus,
}

/// Text payload of a text content part.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireText {
    /// The text itself
    pub value: String,
}

/// One content part of a message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WireContentPart {
    /// Text content
    Text {
        /// Text payload
        text: WireText,
    },
    /// Image files, image URLs, refusals and anything newer
    #[serde(other)]
    Other,
}

/// Message object from a thread listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct WireMessage {
    /// Message identifier
    id: String,
    /// Author role
    role: Role,
    /// Content parts
    #[serde(default)]
    content: Vec<WireContentPart>,
}

/// Response of `GET /threads/{thread_id}/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct MessageList {
    /// Messages in the requested order
    data: Vec<WireMessage>,
    /// Identifier of the first message in `data`
    #[serde(default)]
    first_id: Option<String>,
    /// Whether more pages exist
    #[serde(default)]
    has_more: bool,
}

/// Body of `POST /images/generations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageGenerationRequest {
    /// Image model
    model: String,
    /// Picture description
    prompt: String,
    /// Image size
    size: String,
    /// Image quality
    quality: String,
    /// Number of images
    n: u32,
}

impl ImageGenerationRequest {
    /// Creates a new builder for `ImageGenerationRequest`.
    pub fn builder() -> ImageGenerationRequestBuilder {
        ImageGenerationRequestBuilder::default()
    }
}

/// One generated image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct WireImage {
    /// Hosted image URL
    #[serde(default)]
    url: Option<String>,
    /// Base64 PNG when URLs are not returned
    #[serde(default)]
    b64_json: Option<String>,
    /// Prompt after the service rewrote it
    #[serde(default)]
    revised_prompt: Option<String>,
}

/// Response of `POST /images/generations`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ImageGenerationResponse {
    /// Generated images
    data: Vec<WireImage>,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) message: String,
}
