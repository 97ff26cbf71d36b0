//! Remote service integrations for Picturebook.
//!
//! This crate provides the HTTP client for the OpenAI Assistants v2 and
//! Images APIs. The client implements both [`AssistantBackend`] and
//! [`ImageBackend`], so one value serves the whole pipeline.
//!
//! # Example
//!
//! ```no_run
//! use picturebook_models::OpenAIClient;
//! use picturebook_interface::AssistantBackend;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAIClient::from_env("OPENAI_API_KEY", "https://api.openai.com/v1")?;
//! let conversation = client.create_conversation().await?;
//! println!("Started {}", conversation);
//! # Ok(())
//! # }
//! ```
//!
//! [`AssistantBackend`]: picturebook_interface::AssistantBackend
//! [`ImageBackend`]: picturebook_interface::ImageBackend

mod openai;

pub use openai::{
    CreateAssistantRequest, CreateMessageRequest, CreateRunRequest, ImageGenerationRequest,
    ImageGenerationRequestBuilder, ImageGenerationResponse, MessageList, OpenAIClient, RunObject,
    WireContentPart, WireImage, WireMessage, WireRunStatus, WireText,
};
