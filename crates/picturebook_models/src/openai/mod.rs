//! OpenAI Assistants v2 and Images API integration.

mod client;
mod conversion;
mod dto;

pub use client::OpenAIClient;
pub use dto::{
    CreateAssistantRequest, CreateMessageRequest, CreateRunRequest, ImageGenerationRequest,
    ImageGenerationRequestBuilder, ImageGenerationResponse, MessageList, RunObject,
    WireContentPart, WireImage, WireMessage, WireRunStatus, WireText,
};
