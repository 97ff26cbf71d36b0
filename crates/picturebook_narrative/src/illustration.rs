//! Illustrating a storyboard, one image request per page.

use picturebook_config::ImageConfig;
use picturebook_core::{ImageRequest, Illustration, Storyboard};
use picturebook_error::{ImageError, ImageErrorKind, JsonError, PicturebookError, PicturebookResult};
use picturebook_interface::ImageBackend;
use picturebook_storage::StoryboardStore;

/// Storage key of the illustration set belonging to a storyboard.
pub fn illustrations_key(storyboard_id: &str) -> String {
    format!("{}-illustrations", storyboard_id)
}

/// Request one illustration per page, in page order.
///
/// Pages are illustrated one after another. The first returned image
/// reference is kept for each page.
///
/// # Errors
///
/// The first failing page aborts the whole run and nothing is returned:
/// - `MissingDescription` if a page has a blank illustration text
/// - `GenerationFailed` if the image service fails
/// - `EmptyResponse` if the service answers without images
#[tracing::instrument(skip_all, fields(pages = storyboard.len(), model = %config.model()))]
pub async fn generate_images<I>(
    backend: &I,
    storyboard: &Storyboard,
    config: &ImageConfig,
) -> PicturebookResult<Vec<Illustration>>
where
    I: ImageBackend + ?Sized,
{
    let mut illustrations = Vec::with_capacity(storyboard.len());

    for (index, page) in storyboard.pages().iter().enumerate() {
        let description = page.illustration.trim();
        if description.is_empty() {
            tracing::error!(page = index, "Page has no illustration description");
            return Err(ImageError::new(ImageErrorKind::MissingDescription(index)).into());
        }

        let request = ImageRequest::builder()
            .model(config.model().clone())
            .prompt(description)
            .size(config.size().clone())
            .quality(config.quality().clone())
            .count(*config.count())
            .build()
            .map_err(|e| generation_failed(index, e.to_string()))?;

        tracing::debug!(page = index, page_number = page.page_number, "Requesting illustration");

        let images = backend
            .generate_image(&request)
            .await
            .map_err(|e| generation_failed(index, e.to_string()))?;

        let image = images.into_iter().next().ok_or_else(|| {
            tracing::error!(page = index, "Image service returned no images");
            ImageError::new(ImageErrorKind::EmptyResponse(index))
        })?;

        illustrations.push(Illustration {
            page_index: index,
            page_number: page.page_number,
            description: description.to_string(),
            image,
        });
    }

    tracing::info!(count = illustrations.len(), "Storyboard illustrated");
    Ok(illustrations)
}

/// Persist a completed illustration set next to its storyboard.
///
/// Returns the key the set was stored under.
///
/// # Errors
///
/// Returns an error if the set cannot be encoded or written.
#[tracing::instrument(skip(store, illustrations), fields(count = illustrations.len()))]
pub async fn save_illustrations<St>(
    store: &St,
    storyboard_id: &str,
    illustrations: &[Illustration],
) -> PicturebookResult<String>
where
    St: StoryboardStore + ?Sized,
{
    let key = illustrations_key(storyboard_id);
    let document = serde_json::to_value(illustrations)
        .map_err(|e| JsonError::new(format!("Failed to encode illustrations: {}", e)))?;

    store.save(&key, &document).await?;
    tracing::info!(key = %key, "Illustrations saved");
    Ok(key)
}

fn generation_failed(page: usize, message: String) -> PicturebookError {
    tracing::error!(page, error = %message, "Illustration failed");
    ImageError::new(ImageErrorKind::GenerationFailed { page, message }).into()
}
