//! Story writing command handler.

use super::illustrate::illustrate_and_save;
use picturebook::{
    ConsoleApprovalSurface, FileSystemStoryboardStore, OpenAIClient, PicturebookConfig,
    PicturebookResult, StoryPipeline,
};

/// Run the approval-gated pipeline on the console.
#[tracing::instrument(skip(config))]
pub async fn write_story(config: &PicturebookConfig, illustrate: bool) -> PicturebookResult<()> {
    let client = OpenAIClient::from_env(config.api().api_key_env(), config.api().base_url())?;
    let store = FileSystemStoryboardStore::new(config.storage().path())?;
    let surface = ConsoleApprovalSurface::stdio();

    let outcome = StoryPipeline::new(&client, &surface, &store, config)
        .run()
        .await?;

    println!(
        "\nStoryboard saved as {} ({} pages)",
        outcome.storyboard_id(),
        outcome.storyboard().len()
    );

    if illustrate {
        illustrate_and_save(
            &client,
            &store,
            config,
            outcome.storyboard_id(),
            outcome.storyboard(),
        )
        .await?;
    }

    Ok(())
}
