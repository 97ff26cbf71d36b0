//! In-memory image service.

use async_trait::async_trait;
use picturebook_core::ImageRequest;
use picturebook_error::{ApiError, ApiErrorKind, PicturebookResult};
use picturebook_interface::ImageBackend;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted answer of the image service.
#[derive(Debug, Clone)]
pub enum MockImageResponse {
    /// Return these references
    Images(Vec<String>),
    /// Fail with a server error
    Error(String),
}

/// Image service answering requests in order.
pub struct MockImages {
    responses: Mutex<VecDeque<MockImageResponse>>,
    requests: Mutex<Vec<ImageRequest>>,
}

impl MockImages {
    /// Answer requests with the given responses, in order.
    pub fn new(responses: impl IntoIterator<Item = MockImageResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer every page with one URL derived from its position.
    pub fn urls(count: usize) -> Self {
        Self::new((1..=count).map(|n| {
            MockImageResponse::Images(vec![format!("https://images.test/{}.png", n)])
        }))
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<ImageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageBackend for MockImages {
    async fn generate_image(&self, request: &ImageRequest) -> PicturebookResult<Vec<String>> {
        self.requests.lock().unwrap().push(request.clone());

        match self.responses.lock().unwrap().pop_front() {
            Some(MockImageResponse::Images(images)) => Ok(images),
            Some(MockImageResponse::Error(message)) => Err(ApiError::new(ApiErrorKind::Status {
                status: 400,
                message,
            })
            .into()),
            None => panic!("unexpected image request"),
        }
    }
}
