//! Image generation request and result types.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Parameters for one image generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Image model identifier
    model: String,
    /// Description of the picture to draw
    prompt: String,
    /// Size such as `1024x1024`
    size: String,
    /// Quality such as `standard` or `hd`
    quality: String,
    /// Number of images to request
    #[builder(default = "1")]
    count: u32,
}

impl ImageRequest {
    /// Creates a new builder for `ImageRequest`.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

/// An image reference bound to a storyboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Illustration {
    /// Zero-based position of the page in the storyboard
    pub page_index: usize,
    /// Page number as written in the storyboard
    pub page_number: u32,
    /// Illustration description sent as the prompt
    pub description: String,
    /// Image reference returned by the service (URL or data URI)
    pub image: String,
}
