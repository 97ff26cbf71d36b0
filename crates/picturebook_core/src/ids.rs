//! Opaque identifiers issued by the remote assistant service.

use serde::{Deserialize, Serialize};

macro_rules! remote_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            Serialize,
            Deserialize,
            derive_more::Display,
            derive_more::From,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Borrow the raw identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

remote_id!(
    /// Identifies the persona (system-level assistant configuration).
    PersonaId
);
remote_id!(
    /// Identifies one ongoing conversation (thread).
    ConversationId
);
remote_id!(
    /// Identifies one message within a conversation.
    MessageId
);
remote_id!(
    /// Identifies one asynchronous run of the persona against a conversation.
    RunId
);
