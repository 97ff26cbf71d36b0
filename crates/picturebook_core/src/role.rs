//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a conversation message.
///
/// # Examples
///
/// ```
/// use picturebook_core::Role;
///
/// assert_eq!(Role::User.to_string(), "user");
/// assert_eq!("assistant".parse::<Role>().unwrap(), Role::Assistant);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Turns written by the human (the prompts)
    User,
    /// Turns produced by the persona
    Assistant,
}
