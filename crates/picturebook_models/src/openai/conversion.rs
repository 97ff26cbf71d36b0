//! Conversions between OpenAI wire types and Picturebook core types.

use crate::openai::dto::{WireContentPart, WireImage, WireMessage, WireRunStatus};
use picturebook_core::{ContentPart, MessageId, RunStatus, ThreadMessage};

/// Collapse the wire status into the three states the session acts on.
///
/// `requires_action` counts as failed: the persona has no tools, so no
/// tool output will ever unblock it.
pub(crate) fn run_status(status: WireRunStatus) -> RunStatus {
    match status {
        WireRunStatus::Queued | WireRunStatus::InProgress | WireRunStatus::Cancelling => {
            RunStatus::Pending
        }
        WireRunStatus::Completed => RunStatus::Completed,
        WireRunStatus::RequiresAction => RunStatus::Failed("requires_action".to_string()),
        WireRunStatus::Cancelled => RunStatus::Failed("cancelled".to_string()),
        WireRunStatus::Failed => RunStatus::Failed("failed".to_string()),
        WireRunStatus::Incomplete => RunStatus::Failed("incomplete".to_string()),
        WireRunStatus::Expired => RunStatus::Failed("expired".to_string()),
        WireRunStatus::Unknown => RunStatus::Failed("unknown".to_string()),
    }
}

pub(crate) fn thread_message(message: &WireMessage) -> ThreadMessage {
    ThreadMessage {
        id: MessageId::from(message.id().as_str()),
        role: *message.role(),
        content: message
            .content()
            .iter()
            .map(|part| match part {
                WireContentPart::Text { text } => ContentPart::Text(text.value.clone()),
                WireContentPart::Other => ContentPart::Other,
            })
            .collect(),
    }
}

/// A URL when the service hosts the image, otherwise a PNG data URI.
pub(crate) fn image_reference(image: &WireImage) -> Option<String> {
    if let Some(url) = image.url() {
        return Some(url.clone());
    }
    image
        .b64_json()
        .as_ref()
        .map(|data| format!("data:image/png;base64,{}", data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::dto::{ImageGenerationResponse, MessageList, RunObject};
    use picturebook_core::Role;

    #[test]
    fn test_decode_message_list() {
        let body = r#"{
            "object": "list",
            "data": [
                {
                    "id": "msg_2",
                    "object": "thread.message",
                    "role": "assistant",
                    "content": [
                        {"type": "text", "text": {"value": "Once upon a time", "annotations": []}},
                        {"type": "image_file", "image_file": {"file_id": "file_1"}}
                    ]
                },
                {
                    "id": "msg_1",
                    "object": "thread.message",
                    "role": "user",
                    "content": [{"type": "text", "text": {"value": "Write a story", "annotations": []}}]
                }
            ],
            "first_id": "msg_2",
            "last_id": "msg_1",
            "has_more": false
        }"#;

        let list: MessageList = serde_json::from_str(body).unwrap();
        assert_eq!(list.first_id().as_deref(), Some("msg_2"));
        assert!(!list.has_more());

        let messages: Vec<_> = list.data().iter().map(thread_message).collect();
        assert_eq!(messages[0].id.as_str(), "msg_2");
        assert_eq!(messages[0].role, Role::Assistant);
        assert_eq!(
            messages[0].content,
            vec![ContentPart::Text("Once upon a time".to_string()), ContentPart::Other]
        );
        assert_eq!(messages[1].role, Role::User);
    }

    #[test]
    fn test_decode_run_statuses() {
        let cases = [
            ("queued", RunStatus::Pending),
            ("in_progress", RunStatus::Pending),
            ("cancelling", RunStatus::Pending),
            ("completed", RunStatus::Completed),
            ("failed", RunStatus::Failed("failed".to_string())),
            ("expired", RunStatus::Failed("expired".to_string())),
            ("requires_action", RunStatus::Failed("requires_action".to_string())),
            ("something_new", RunStatus::Failed("unknown".to_string())),
        ];

        for (wire, expected) in cases {
            let body = format!(r#"{{"id": "run_1", "object": "thread.run", "status": "{}"}}"#, wire);
            let run: RunObject = serde_json::from_str(&body).unwrap();
            assert_eq!(run.id(), "run_1");
            assert_eq!(run_status(*run.status()), expected, "status {}", wire);
        }
    }

    #[test]
    fn test_image_reference_prefers_url() {
        let body = r#"{"created": 1, "data": [
            {"url": "https://images.example/1.png", "revised_prompt": "a red apple falling"},
            {"b64_json": "iVBORw0KGgo="}
        ]}"#;

        let response: ImageGenerationResponse = serde_json::from_str(body).unwrap();
        let references: Vec<_> = response.data().iter().filter_map(image_reference).collect();

        assert_eq!(
            references,
            vec![
                "https://images.example/1.png".to_string(),
                "data:image/png;base64,iVBORw0KGgo=".to_string(),
            ]
        );
    }
}
