//! The creator toolkit dispatch layer.

use crate::prompt::{
    CAPTIONS_TEMPERATURE, DEFAULT_MODEL, OUTLINE_TEMPERATURE, Platform, THUMBNAILS_TEMPERATURE,
    TITLES_TEMPERATURE, Tone, captions_prompt, outline_prompt, thumbnails_prompt, titles_prompt,
};
use vasari_core::{ContentDriver, GenerateRequest, GenerateResponse};
use vasari_error::VasariResult;

/// Dispatches the four drafting operations through a generation driver.
///
/// Every operation builds one request from its template, sends it, and
/// returns the response text untouched. Temperatures and the model are
/// fixed per operation; only the interpolated form fields vary.
pub struct CreatorToolkit<D: ContentDriver> {
    driver: D,
}

impl<D: ContentDriver> CreatorToolkit<D> {
    /// Create a new toolkit over the given driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Draft a video script outline for a topic and audience.
    pub async fn draft_outline(
        &self,
        topic: &str,
        audience: &str,
    ) -> VasariResult<GenerateResponse> {
        self.dispatch(outline_prompt(topic, audience), OUTLINE_TEMPERATURE)
            .await
    }

    /// Draft captions and hashtags for a platform post.
    pub async fn draft_captions(
        &self,
        summary: &str,
        platform: Platform,
        tone: Tone,
    ) -> VasariResult<GenerateResponse> {
        self.dispatch(
            captions_prompt(summary, platform, tone),
            CAPTIONS_TEMPERATURE,
        )
        .await
    }

    /// Draft thumbnail concepts for a video topic.
    ///
    /// The shell offers counts from 1 to 5; the count is spliced into the
    /// prompt as given.
    pub async fn draft_thumbnail_ideas(
        &self,
        topic: &str,
        count: u8,
    ) -> VasariResult<GenerateResponse> {
        self.dispatch(thumbnails_prompt(topic, count), THUMBNAILS_TEMPERATURE)
            .await
    }

    /// Draft video titles for a topic.
    ///
    /// The shell offers counts from 3 to 10; the count is spliced into the
    /// prompt as given.
    pub async fn draft_titles(&self, topic: &str, count: u8) -> VasariResult<GenerateResponse> {
        self.dispatch(titles_prompt(topic, count), TITLES_TEMPERATURE)
            .await
    }

    /// Get a reference to the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    #[tracing::instrument(skip(self, prompt), fields(provider = self.driver.provider_name()))]
    async fn dispatch(&self, prompt: String, temperature: f32) -> VasariResult<GenerateResponse> {
        let request = GenerateRequest::new(prompt, DEFAULT_MODEL, temperature);
        self.driver.generate(&request).await
    }
}
