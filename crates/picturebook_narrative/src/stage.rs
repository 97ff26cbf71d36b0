//! Approval-gated stages.
//!
//! A stage sends a prompt, shows the persona's reply and asks the human
//! whether it is acceptable. Rejection simply asks again in the same
//! conversation; approval hands the reply to the stage's extractor.

use crate::{ConversationSession, confirm_label};
use derive_getters::Getters;
use picturebook_core::Role;
use picturebook_error::PicturebookResult;
use picturebook_interface::{ApprovalSurface, AssistantBackend};

/// Static description of a stage.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StageSpec {
    /// Name shown to the human, e.g. `outline`
    label: String,
}

impl StageSpec {
    /// Describe a stage by its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Drives stages over one conversation and one approval surface.
pub struct StageRunner<'a, B: AssistantBackend + ?Sized, S: ApprovalSurface + ?Sized> {
    session: ConversationSession<'a, B>,
    surface: &'a S,
}

impl<'a, B, S> StageRunner<'a, B, S>
where
    B: AssistantBackend + ?Sized,
    S: ApprovalSurface + ?Sized,
{
    /// Create a runner over a started session.
    pub fn new(session: ConversationSession<'a, B>, surface: &'a S) -> Self {
        Self { session, surface }
    }

    /// Repeat a stage until the human approves a reply, then extract its result.
    ///
    /// The prompt is rebuilt for every attempt. Rejected replies stay in the
    /// conversation, so the persona sees its own earlier drafts. Attempts are
    /// unbounded.
    ///
    /// # Errors
    ///
    /// Session and surface errors abort the stage. An extraction error on the
    /// approved reply is returned as-is; the stage is not retried.
    #[tracing::instrument(
        skip(self, stage, prompt_builder, extractor),
        fields(stage = %stage.label(), attempts = tracing::field::Empty)
    )]
    pub async fn run_stage<T, P, E>(
        &mut self,
        stage: &StageSpec,
        prompt_builder: P,
        extractor: E,
    ) -> PicturebookResult<T>
    where
        P: Fn() -> String,
        E: Fn(&str) -> PicturebookResult<T>,
    {
        let question = confirm_label(stage.label());
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            tracing::Span::current().record("attempts", attempts);

            let prompt = prompt_builder();
            self.session.send_and_await(Role::User, &prompt).await?;
            let reply = self.session.drain_new_assistant_text().await?;

            self.surface.show(stage.label(), &reply)?;

            if self.surface.confirm(&question)? {
                tracing::info!(attempts, "Stage approved");
                return extractor(&reply);
            }

            tracing::warn!(attempts, "Stage rejected, asking again");
        }
    }

    /// [`run_stage`](Self::run_stage) keeping the approved reply as text.
    ///
    /// # Errors
    ///
    /// Session and surface errors abort the stage.
    pub async fn run_text_stage<P>(
        &mut self,
        stage: &StageSpec,
        prompt_builder: P,
    ) -> PicturebookResult<String>
    where
        P: Fn() -> String,
    {
        self.run_stage(stage, prompt_builder, |reply| Ok(reply.to_string()))
            .await
    }

    /// The underlying conversation.
    pub fn session(&self) -> &ConversationSession<'a, B> {
        &self.session
    }

    /// Give back the conversation.
    pub fn into_session(self) -> ConversationSession<'a, B> {
        self.session
    }
}
