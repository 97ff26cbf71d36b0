//! Message types for conversation history.

use crate::{MessageId, Role};
use serde::{Deserialize, Serialize};

/// One part of a message body.
///
/// The service may attach non-text parts (image files, for example); those
/// are carried as `Other` and never concatenated into reply text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentPart {
    /// Plain text
    Text(String),
    /// Anything else the service returned
    Other,
}

impl ContentPart {
    /// The text of this part, if it is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentPart::Text(text) => Some(text),
            ContentPart::Other => None,
        }
    }
}

/// A message stored in a remote conversation.
///
/// # Examples
///
/// ```
/// use picturebook_core::{ContentPart, MessageId, Role, ThreadMessage};
///
/// let message = ThreadMessage {
///     id: MessageId::from("msg_1"),
///     role: Role::Assistant,
///     content: vec![ContentPart::Text("Once upon a time".to_string()), ContentPart::Other],
/// };
///
/// assert_eq!(message.text(), "Once upon a time");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadMessage {
    /// Service-assigned identifier
    pub id: MessageId,
    /// Author of the message
    pub role: Role,
    /// Ordered content parts
    pub content: Vec<ContentPart>,
}

impl ThreadMessage {
    /// Concatenation of every text part, ignoring other parts.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(ContentPart::as_text)
            .collect::<String>()
    }
}
