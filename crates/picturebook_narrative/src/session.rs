//! A single conversation with the remote persona.
//!
//! The session owns the conversation handle and the cursor that separates
//! replies already shown to the human from new ones.

use picturebook_config::SessionConfig;
use picturebook_core::{ConversationId, MessageId, PersonaId, PersonaSpec, Role, RunStatus};
use picturebook_error::{PicturebookError, PicturebookResult, SessionError, SessionErrorKind};
use picturebook_interface::AssistantBackend;
use tokio::time::Instant;

/// One conversation with one persona, driven turn by turn.
///
/// Each turn borrows the session mutably, so a second run can never be
/// started on the conversation while one is still in flight.
pub struct ConversationSession<'a, B: AssistantBackend + ?Sized> {
    backend: &'a B,
    conversation_id: ConversationId,
    persona_id: PersonaId,
    last_seen_message_id: Option<MessageId>,
    config: SessionConfig,
}

impl<'a, B: AssistantBackend + ?Sized> ConversationSession<'a, B> {
    /// Create the persona, then an empty conversation.
    ///
    /// # Errors
    ///
    /// Returns `SetupFailed` if either creation call fails. There is no retry.
    #[tracing::instrument(
        skip(backend, persona, config),
        fields(provider = backend.provider_name(), persona = persona.name().as_str())
    )]
    pub async fn start(
        backend: &'a B,
        persona: &PersonaSpec,
        config: SessionConfig,
    ) -> PicturebookResult<Self> {
        let persona_id = backend
            .create_persona(persona)
            .await
            .map_err(|e| setup_failed("persona", e))?;

        let conversation_id = backend
            .create_conversation()
            .await
            .map_err(|e| setup_failed("conversation", e))?;

        tracing::info!(
            persona_id = %persona_id,
            conversation_id = %conversation_id,
            "Conversation session started"
        );

        Ok(Self {
            backend,
            conversation_id,
            persona_id,
            last_seen_message_id: None,
            config,
        })
    }

    /// Post a turn and block until the persona has answered it.
    ///
    /// Polls the run every `poll_interval_ms`. Nothing local changes; the
    /// reply is read afterwards with [`drain_new_assistant_text`].
    ///
    /// # Errors
    ///
    /// - `Timeout` if the run is still pending after `max_wait_ms`
    /// - `RunFailed` if the run ends in any status other than completed
    /// - any backend error from posting, starting or polling
    ///
    /// [`drain_new_assistant_text`]: Self::drain_new_assistant_text
    #[tracing::instrument(
        skip(self, content),
        fields(conversation_id = %self.conversation_id, role = %role, content_length = content.len())
    )]
    pub async fn send_and_await(&mut self, role: Role, content: &str) -> PicturebookResult<()> {
        let message_id = self
            .backend
            .post_message(&self.conversation_id, role, content)
            .await?;
        let run_id = self
            .backend
            .start_run(&self.conversation_id, &self.persona_id)
            .await?;

        tracing::debug!(message_id = %message_id, run_id = %run_id, "Run started");

        let started = Instant::now();
        let mut polls = 0u32;

        loop {
            polls += 1;
            match self
                .backend
                .get_run_status(&self.conversation_id, &run_id)
                .await?
            {
                RunStatus::Completed => {
                    tracing::debug!(run_id = %run_id, polls, "Run completed");
                    return Ok(());
                }
                RunStatus::Failed(status) => {
                    tracing::error!(run_id = %run_id, status = %status, "Run failed");
                    return Err(SessionError::new(SessionErrorKind::RunFailed {
                        run_id: run_id.to_string(),
                        status,
                    })
                    .into());
                }
                RunStatus::Pending => {}
            }

            let waited = started.elapsed();
            if waited >= self.config.max_wait() {
                tracing::error!(run_id = %run_id, polls, "Run did not complete in time");
                return Err(SessionError::new(SessionErrorKind::Timeout {
                    run_id: run_id.to_string(),
                    waited_ms: u64::try_from(waited.as_millis()).unwrap_or(u64::MAX),
                })
                .into());
            }

            tracing::debug!(run_id = %run_id, polls, "Run pending");
            tokio::time::sleep(self.config.poll_interval()).await;
        }
    }

    /// Collect assistant text posted since the last drain.
    ///
    /// Each new assistant message, oldest first, becomes one tab-indented
    /// line. User messages are skipped but still move the cursor. Returns
    /// an empty string when nothing is new.
    #[tracing::instrument(skip(self), fields(conversation_id = %self.conversation_id))]
    pub async fn drain_new_assistant_text(&mut self) -> PicturebookResult<String> {
        let messages = self.backend.list_messages(&self.conversation_id).await?;

        let mut fresh: Vec<_> = messages
            .iter()
            .take_while(|message| Some(&message.id) != self.last_seen_message_id.as_ref())
            .collect();

        if fresh.is_empty() {
            tracing::debug!("No new messages");
            return Ok(String::new());
        }

        let newest = messages[0].id.clone();
        fresh.reverse();

        let text: String = fresh
            .iter()
            .filter(|message| message.role == Role::Assistant)
            .map(|message| format!("\t{}\n", message.text()))
            .collect();

        tracing::debug!(
            new_messages = fresh.len(),
            cursor = %newest,
            "Advanced message cursor"
        );
        self.last_seen_message_id = Some(newest);

        Ok(text)
    }

    /// Identifier of the remote conversation.
    pub fn conversation_id(&self) -> &ConversationId {
        &self.conversation_id
    }

    /// Identifier of the persona answering every turn.
    pub fn persona_id(&self) -> &PersonaId {
        &self.persona_id
    }

    /// Newest message already drained, if any.
    pub fn last_seen_message_id(&self) -> Option<&MessageId> {
        self.last_seen_message_id.as_ref()
    }
}

fn setup_failed(what: &str, error: PicturebookError) -> PicturebookError {
    tracing::error!(error = %error, "Failed to create {}", what);
    SessionError::new(SessionErrorKind::SetupFailed(format!(
        "could not create {}: {}",
        what, error
    )))
    .into()
}
