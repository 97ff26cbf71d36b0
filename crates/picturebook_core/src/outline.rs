//! Story outline produced by the outline stage in JSON mode.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Characters, setting and plot of a story.
///
/// The model decides how to shape each field (a list of names, a map of
/// descriptions, bullet strings), so each one is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Characters in the story
    pub characters: JsonValue,
    /// Where the story takes place
    pub setting: JsonValue,
    /// Plot points
    pub plot: JsonValue,
}
