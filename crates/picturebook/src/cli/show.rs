//! Storyboard display command handler.

use picturebook::{
    FileSystemStoryboardStore, PicturebookConfig, PicturebookResult, load_storyboard,
};

/// Print every page of a saved storyboard.
pub async fn show_storyboard(config: &PicturebookConfig, id: &str) -> PicturebookResult<()> {
    let store = FileSystemStoryboardStore::new(config.storage().path())?;
    let storyboard = load_storyboard(&store, id).await?;

    println!("Storyboard {} ({} pages)", id, storyboard.len());
    for page in storyboard.pages() {
        println!("\nPage {}", page.page_number);
        println!("  {}", page.text);
        println!("  Illustration: {}", page.illustration);
    }

    Ok(())
}
