//! Prompts and labels shown to the persona and the human.

use picturebook_config::OutlineFormat;

/// Label of the topic question.
pub const TOPIC_LABEL: &str = "Please enter the topic for the story: ";

/// Label of the audience question.
pub const AUDIENCE_LABEL: &str = "Please enter the target audience: ";

/// Stage label for the outline.
pub const OUTLINE_STAGE: &str = "outline";

/// Stage label for the full story.
pub const STORY_STAGE: &str = "story";

/// Stage label for the paginated storyboard.
pub const STORYBOARD_STAGE: &str = "page breaks";

/// Asks the persona to expand the approved outline.
pub const STORY_PROMPT: &str = "Please flesh out the outline to a full story";

/// Asks the persona to paginate the approved story.
pub const STORYBOARD_PROMPT: &str = "Please break the story up into pages and suggest an accompanying illustration for each page in JSON format with the fields 'page_number', 'text', 'illustration'.";

const OUTLINE_JSON_SUFFIX: &str =
    ". The output should be a JSON with field 'characters', 'setting', 'plot'.";

/// Build the outline request for a topic and audience.
///
/// # Examples
///
/// ```
/// use picturebook_config::OutlineFormat;
/// use picturebook_narrative::outline_prompt;
///
/// assert_eq!(
///     outline_prompt("gravity", "5 year olds", OutlineFormat::Text),
///     "Please write a story outline explaining gravity for 5 year olds",
/// );
/// ```
pub fn outline_prompt(topic: &str, audience: &str, format: OutlineFormat) -> String {
    let prompt = format!(
        "Please write a story outline explaining {} for {}",
        topic, audience
    );
    match format {
        OutlineFormat::Text => prompt,
        OutlineFormat::Json => prompt + OUTLINE_JSON_SUFFIX,
    }
}

/// Question asked after each draft of a stage.
pub fn confirm_label(stage_label: &str) -> String {
    format!(
        "Are you satisfied with the given {}? (yes/no): ",
        stage_label
    )
}
