//! Trait definitions for remote services and the approval surface.

use async_trait::async_trait;
use picturebook_core::{
    ConversationId, ImageRequest, MessageId, PersonaId, PersonaSpec, Role, RunId, RunStatus,
    ThreadMessage,
};
use picturebook_error::PicturebookResult;

/// Remote assistant service: personas, conversations and asynchronous runs.
///
/// Implementations translate these calls to a vendor wire format. None of
/// the methods retry; failures surface to the caller unchanged.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Create the persona that will answer every turn.
    async fn create_persona(&self, spec: &PersonaSpec) -> PicturebookResult<PersonaId>;

    /// Create an empty conversation.
    async fn create_conversation(&self) -> PicturebookResult<ConversationId>;

    /// Append a message to a conversation.
    async fn post_message(
        &self,
        conversation: &ConversationId,
        role: Role,
        content: &str,
    ) -> PicturebookResult<MessageId>;

    /// Ask the persona to answer the conversation's current state.
    async fn start_run(
        &self,
        conversation: &ConversationId,
        persona: &PersonaId,
    ) -> PicturebookResult<RunId>;

    /// Poll the status of a run.
    async fn get_run_status(
        &self,
        conversation: &ConversationId,
        run: &RunId,
    ) -> PicturebookResult<RunStatus>;

    /// All messages of a conversation, newest first.
    async fn list_messages(
        &self,
        conversation: &ConversationId,
    ) -> PicturebookResult<Vec<ThreadMessage>>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;
}

/// Remote image generation service.
#[async_trait]
pub trait ImageBackend: Send + Sync {
    /// Generate images for a description, returning one reference per image.
    async fn generate_image(&self, request: &ImageRequest) -> PicturebookResult<Vec<String>>;
}

/// Where the human reads drafts and answers questions.
///
/// Calls block until the human responds. A console and a windowed UI are
/// both valid implementations; tests use a scripted one.
pub trait ApprovalSurface: Send + Sync {
    /// Ask for free text.
    fn prompt_text(&self, label: &str) -> PicturebookResult<String>;

    /// Present text to the human.
    fn show(&self, label: &str, text: &str) -> PicturebookResult<()>;

    /// Ask a yes/no question.
    fn confirm(&self, label: &str) -> PicturebookResult<bool>;
}
