//! Prompt templates and form field types.
//!
//! Each drafting operation formats one fixed template. User text is
//! interpolated verbatim; the templates carry all the framing the model
//! needs.

use serde::{Deserialize, Serialize};

/// Model identifier used for every drafting operation.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Sampling temperature for script outlines.
pub const OUTLINE_TEMPERATURE: f32 = 0.7;

/// Sampling temperature for captions and hashtags.
pub const CAPTIONS_TEMPERATURE: f32 = 0.8;

/// Sampling temperature for thumbnail ideas.
pub const THUMBNAILS_TEMPERATURE: f32 = 0.9;

/// Sampling temperature for video titles.
pub const TITLES_TEMPERATURE: f32 = 0.9;

/// Social platform a caption set targets.
///
/// Display matches the platform's own branding, which is how the name is
/// spliced into the prompt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Platform {
    Instagram,
    TikTok,
    Facebook,
    Twitter,
}

/// Voice of a generated caption set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    Friendly,
    Professional,
    Humorous,
    Exciting,
}

/// Prompt for a detailed video script outline.
pub fn outline_prompt(topic: &str, audience: &str) -> String {
    format!(
        "You are a professional content writer. Generate a detailed script outline for a video \
         about '{}'. Tailor it for a {} audience. Include: A catchy hook, 3 main points with \
         brief explanations, and a strong call to action. Format the output using markdown \
         headings and lists.",
        topic, audience
    )
}

/// Prompt for captions and hashtags targeting one platform.
pub fn captions_prompt(summary: &str, platform: Platform, tone: Tone) -> String {
    format!(
        "Generate 3 {} captions and 7 relevant hashtags for a {} post. The content is \
         summarized as: '{}'. Captions should be short and engaging. Hashtags should be a mix \
         of broad and niche.",
        tone, platform, summary
    )
}

/// Prompt for visually descriptive thumbnail concepts.
pub fn thumbnails_prompt(topic: &str, count: u8) -> String {
    format!(
        "Brainstorm {} distinct, visually descriptive thumbnail ideas for a video about '{}'. \
         For each idea, describe the main image, the emotional mood, and the text overlay \
         (e.g., 'BIG TEXT HERE').",
        count, topic
    )
}

/// Prompt for click-worthy video titles.
pub fn titles_prompt(topic: &str, count: u8) -> String {
    format!(
        "Generate {} catchy and click-worthy video titles for a video about '{}'. Titles \
         should include power words and numbers where appropriate. Output as a numbered list.",
        count, topic
    )
}
