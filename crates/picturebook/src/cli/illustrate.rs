//! Illustration command handler.

use picturebook::{
    FileSystemStoryboardStore, ImageBackend, OpenAIClient, PicturebookConfig, PicturebookResult,
    Storyboard, StoryboardStore, generate_images, load_storyboard, save_illustrations,
};

/// Illustrate a saved storyboard.
#[tracing::instrument(skip(config))]
pub async fn illustrate_storyboard(config: &PicturebookConfig, id: &str) -> PicturebookResult<()> {
    let client = OpenAIClient::from_env(config.api().api_key_env(), config.api().base_url())?;
    let store = FileSystemStoryboardStore::new(config.storage().path())?;

    let storyboard = load_storyboard(&store, id).await?;
    illustrate_and_save(&client, &store, config, id, &storyboard).await
}

/// Generate one image per page, print them and save the set.
pub(crate) async fn illustrate_and_save<I, St>(
    images: &I,
    store: &St,
    config: &PicturebookConfig,
    id: &str,
    storyboard: &Storyboard,
) -> PicturebookResult<()>
where
    I: ImageBackend + ?Sized,
    St: StoryboardStore + ?Sized,
{
    let illustrations = generate_images(images, storyboard, config.images()).await?;

    for illustration in &illustrations {
        println!("{} {}", illustration.description, illustration.image);
    }

    let key = save_illustrations(store, id, &illustrations).await?;
    println!("\nIllustrations saved as {}", key);
    Ok(())
}
