//! The outline → story → storyboard pipeline.

use crate::{
    AUDIENCE_LABEL, ConversationSession, OUTLINE_STAGE, STORY_PROMPT, STORY_STAGE,
    STORYBOARD_PROMPT, STORYBOARD_STAGE, StageRunner, StageSpec, TOPIC_LABEL, extract_outline,
    extract_storyboard, outline_prompt,
};
use derive_getters::Getters;
use picturebook_config::{OutlineFormat, PicturebookConfig};
use picturebook_core::{Outline, Storyboard};
use picturebook_error::{JsonError, PicturebookResult};
use picturebook_interface::{ApprovalSurface, AssistantBackend};
use picturebook_storage::{StoryboardStore, new_storyboard_id};

/// Everything an approved pipeline run produced.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct StoryOutcome {
    /// Key the storyboard was persisted under
    storyboard_id: String,
    /// Approved outline reply
    outline: String,
    /// Outline fields, when the outline was requested as JSON
    structured_outline: Option<Outline>,
    /// Approved story reply
    story: String,
    /// Approved and persisted storyboard
    storyboard: Storyboard,
}

/// Runs the three stages in order and persists the resulting storyboard.
///
/// Stages only move forward: rejecting a story never revisits the outline.
///
/// # Example
///
/// ```rust,ignore
/// use picturebook_narrative::StoryPipeline;
///
/// let pipeline = StoryPipeline::new(&client, &surface, &store, &config);
/// let outcome = pipeline.run().await?;
/// println!("Saved storyboard {}", outcome.storyboard_id());
/// ```
pub struct StoryPipeline<'a, B, S, St>
where
    B: AssistantBackend + ?Sized,
    S: ApprovalSurface + ?Sized,
    St: StoryboardStore + ?Sized,
{
    backend: &'a B,
    surface: &'a S,
    store: &'a St,
    config: &'a PicturebookConfig,
}

impl<'a, B, S, St> StoryPipeline<'a, B, S, St>
where
    B: AssistantBackend + ?Sized,
    S: ApprovalSurface + ?Sized,
    St: StoryboardStore + ?Sized,
{
    /// Assemble a pipeline from its collaborators.
    pub fn new(
        backend: &'a B,
        surface: &'a S,
        store: &'a St,
        config: &'a PicturebookConfig,
    ) -> Self {
        Self {
            backend,
            surface,
            store,
            config,
        }
    }

    /// Ask for a topic and audience, run every stage, then save the storyboard once.
    ///
    /// # Errors
    ///
    /// Any session, surface, extraction or storage error ends the run. No
    /// storyboard is saved unless all three stages were approved.
    #[tracing::instrument(skip(self), fields(provider = self.backend.provider_name()))]
    pub async fn run(&self) -> PicturebookResult<StoryOutcome> {
        let topic = self.surface.prompt_text(TOPIC_LABEL)?.trim().to_lowercase();
        let audience = self
            .surface
            .prompt_text(AUDIENCE_LABEL)?
            .trim()
            .to_lowercase();

        tracing::info!(topic = %topic, audience = %audience, "Starting story pipeline");

        let persona = self.config.persona().to_spec()?;
        let session =
            ConversationSession::start(self.backend, &persona, *self.config.session()).await?;
        let mut runner = StageRunner::new(session, self.surface);

        let format = *self.config.pipeline().outline_format();
        let lenient = *self.config.pipeline().lenient_extraction();
        let outline_stage = StageSpec::new(OUTLINE_STAGE);
        let build_outline_prompt = || outline_prompt(&topic, &audience, format);

        let (outline, structured_outline) = match format {
            OutlineFormat::Text => (
                runner
                    .run_text_stage(&outline_stage, build_outline_prompt)
                    .await?,
                None,
            ),
            OutlineFormat::Json => {
                let (text, outline) = runner
                    .run_stage(&outline_stage, build_outline_prompt, |reply| {
                        Ok((reply.to_string(), extract_outline(reply, lenient)?))
                    })
                    .await?;
                tracing::info!(characters = %outline.characters, "Outline characters");
                (text, Some(outline))
            }
        };

        let story = runner
            .run_text_stage(&StageSpec::new(STORY_STAGE), || STORY_PROMPT.to_string())
            .await?;

        let storyboard = runner
            .run_stage(
                &StageSpec::new(STORYBOARD_STAGE),
                || STORYBOARD_PROMPT.to_string(),
                |reply| extract_storyboard(reply, lenient),
            )
            .await?;

        let storyboard_id = new_storyboard_id();
        let document = serde_json::to_value(&storyboard)
            .map_err(|e| JsonError::new(format!("Failed to encode storyboard: {}", e)))?;
        self.store.save(&storyboard_id, &document).await?;

        tracing::info!(
            storyboard_id = %storyboard_id,
            pages = storyboard.len(),
            "Storyboard saved"
        );

        Ok(StoryOutcome {
            storyboard_id,
            outline,
            structured_outline,
            story,
            storyboard,
        })
    }
}

/// Load a previously saved storyboard.
///
/// # Errors
///
/// Returns a storage error if nothing is stored under `id`, or a JSON error
/// if the stored document is not a storyboard.
#[tracing::instrument(skip(store))]
pub async fn load_storyboard<St>(store: &St, id: &str) -> PicturebookResult<Storyboard>
where
    St: StoryboardStore + ?Sized,
{
    let document = store.load(id).await?;
    let storyboard: Storyboard = serde_json::from_value(document)
        .map_err(|e| JsonError::new(format!("Stored document {} is not a storyboard: {}", id, e)))?;

    tracing::debug!(pages = storyboard.len(), "Storyboard loaded");
    Ok(storyboard)
}
