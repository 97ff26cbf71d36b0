//! Storyboard types.

use serde::{Deserialize, Serialize, Serializer};

/// One page of the picture book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// One-based page number
    pub page_number: u32,
    /// Narrative text printed on the page
    pub text: String,
    /// Description of the accompanying picture
    pub illustration: String,
}

/// Ordered pages of a story.
///
/// Serializes as a bare JSON array. Deserializes from a bare array or from
/// an object holding the array under `pages`, which models produce often
/// enough to accept.
///
/// # Examples
///
/// ```
/// use picturebook_core::Storyboard;
///
/// let bare: Storyboard = serde_json::from_str(
///     r#"[{"page_number": 1, "text": "Plop!", "illustration": "a falling apple"}]"#,
/// ).unwrap();
/// let wrapped: Storyboard = serde_json::from_str(
///     r#"{"pages": [{"page_number": 1, "text": "Plop!", "illustration": "a falling apple"}]}"#,
/// ).unwrap();
///
/// assert_eq!(bare, wrapped);
/// assert!(serde_json::to_string(&bare).unwrap().starts_with('['));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "StoryboardRepr")]
pub struct Storyboard {
    pages: Vec<Page>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoryboardRepr {
    Bare(Vec<Page>),
    Wrapped { pages: Vec<Page> },
}

impl From<StoryboardRepr> for Storyboard {
    fn from(repr: StoryboardRepr) -> Self {
        match repr {
            StoryboardRepr::Bare(pages) | StoryboardRepr::Wrapped { pages } => Self { pages },
        }
    }
}

impl Serialize for Storyboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.pages.serialize(serializer)
    }
}

impl Storyboard {
    /// Create a storyboard from pages in reading order.
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Pages in reading order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the storyboard has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
