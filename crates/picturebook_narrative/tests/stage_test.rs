mod test_utils;

use picturebook_config::{PicturebookConfig, SessionConfig};
use picturebook_core::Role;
use picturebook_error::{ExtractionErrorKind, PicturebookErrorKind};
use picturebook_narrative::{ConversationSession, StageRunner, StageSpec, extract_storyboard};
use test_utils::{MockAssistant, ScriptedSurface};

async fn runner<'a>(
    backend: &'a MockAssistant,
    surface: &'a ScriptedSurface,
) -> anyhow::Result<StageRunner<'a, MockAssistant, ScriptedSurface>> {
    let persona = PicturebookConfig::defaults()?.persona().to_spec()?;
    let session = ConversationSession::start(backend, &persona, SessionConfig::new(1, 200)).await?;
    Ok(StageRunner::new(session, surface))
}

#[tokio::test]
async fn test_rejections_repeat_the_prompt() -> anyhow::Result<()> {
    let backend = MockAssistant::with_replies(["draft 1", "draft 2", "draft 3"]);
    let surface = ScriptedSurface::new(Vec::<String>::new(), [false, false, true]);
    let mut runner = runner(&backend, &surface).await?;

    let story = runner
        .run_text_stage(&StageSpec::new("story"), || "write it".to_string())
        .await?;

    assert_eq!(story, "\tdraft 3\n");
    assert_eq!(backend.posted(), vec!["write it"; 3]);
    assert_eq!(backend.runs_started(), 3);

    let shown = surface.shown();
    assert_eq!(shown.len(), 3);
    assert_eq!(shown[0], ("story".to_string(), "\tdraft 1\n".to_string()));
    assert_eq!(
        surface.questions(),
        vec!["Are you satisfied with the given story? (yes/no): "; 3]
    );
    Ok(())
}

#[tokio::test]
async fn test_rejected_drafts_stay_in_conversation() -> anyhow::Result<()> {
    let backend = MockAssistant::with_replies(["draft 1", "draft 2"]);
    let surface = ScriptedSurface::new(Vec::<String>::new(), [false, true]);
    let mut runner = runner(&backend, &surface).await?;

    runner
        .run_text_stage(&StageSpec::new("outline"), || "outline please".to_string())
        .await?;

    let assistant_texts: Vec<_> = backend
        .messages()
        .iter()
        .filter(|message| message.role == Role::Assistant)
        .map(|message| message.text())
        .collect();
    assert_eq!(assistant_texts, vec!["draft 1", "draft 2"]);
    Ok(())
}

#[tokio::test]
async fn test_prompt_is_rebuilt_every_attempt() -> anyhow::Result<()> {
    let backend = MockAssistant::with_replies(["x", "y"]);
    let surface = ScriptedSurface::new(Vec::<String>::new(), [false, true]);
    let mut runner = runner(&backend, &surface).await?;

    let calls = std::cell::Cell::new(0);
    runner
        .run_text_stage(&StageSpec::new("story"), || {
            calls.set(calls.get() + 1);
            format!("attempt {}", calls.get())
        })
        .await?;

    assert_eq!(backend.posted(), vec!["attempt 1", "attempt 2"]);
    Ok(())
}

#[tokio::test]
async fn test_extractor_runs_only_on_approval() -> anyhow::Result<()> {
    let backend = MockAssistant::with_replies(["not json", "```json\n[]\n```"]);
    let surface = ScriptedSurface::new(Vec::<String>::new(), [false, true]);
    let mut runner = runner(&backend, &surface).await?;

    let storyboard = runner
        .run_stage(
            &StageSpec::new("page breaks"),
            || "paginate".to_string(),
            |reply| extract_storyboard(reply, false),
        )
        .await?;

    assert!(storyboard.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_extraction_failure_after_approval_is_fatal() -> anyhow::Result<()> {
    let backend = MockAssistant::with_replies(["Sorry, no JSON today", "unused"]);
    let surface = ScriptedSurface::new(Vec::<String>::new(), [true, true]);
    let mut runner = runner(&backend, &surface).await?;

    let err = runner
        .run_stage(
            &StageSpec::new("page breaks"),
            || "paginate".to_string(),
            |reply| extract_storyboard(reply, false),
        )
        .await
        .expect_err("extraction should fail");

    match err.kind() {
        PicturebookErrorKind::Extraction(inner) => {
            assert_eq!(inner.kind, ExtractionErrorKind::NoJsonBlockFound)
        }
        other => panic!("expected an extraction error, got {}", other),
    }
    assert_eq!(backend.runs_started(), 1);
    assert_eq!(surface.questions().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_failing_extractor_runs_once_after_rejections() -> anyhow::Result<()> {
    let backend = MockAssistant::with_replies(["draft 1", "draft 2", "draft 3"]);
    let surface = ScriptedSurface::new(Vec::<String>::new(), [false, false, true]);
    let mut runner = runner(&backend, &surface).await?;

    let calls = std::cell::Cell::new(0);
    let err = runner
        .run_stage(
            &StageSpec::new("page breaks"),
            || "paginate".to_string(),
            |reply| {
                calls.set(calls.get() + 1);
                extract_storyboard(reply, false)
            },
        )
        .await
        .expect_err("no draft holds JSON");

    match err.kind() {
        PicturebookErrorKind::Extraction(inner) => {
            assert_eq!(inner.kind, ExtractionErrorKind::NoJsonBlockFound)
        }
        other => panic!("expected an extraction error, got {}", other),
    }
    assert_eq!(calls.get(), 1);
    assert_eq!(backend.runs_started(), 3);
    assert_eq!(surface.questions().len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_surface_failure_aborts_stage() -> anyhow::Result<()> {
    let backend = MockAssistant::with_replies(["draft"]);
    let surface = ScriptedSurface::new(Vec::<String>::new(), Vec::new());
    let mut runner = runner(&backend, &surface).await?;

    let err = runner
        .run_text_stage(&StageSpec::new("story"), || "go".to_string())
        .await
        .expect_err("surface has no answers");

    assert!(matches!(err.kind(), PicturebookErrorKind::Surface(_)));
    Ok(())
}
