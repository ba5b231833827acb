//! Shared request-handler state.

use std::sync::Arc;

use vasari_core::ContentDriver;
use vasari_studio::CreatorToolkit;

/// Handles shared across request handlers.
///
/// Cloned per request by the router, so the toolkit sits behind an [`Arc`].
pub struct AppState<D: ContentDriver> {
    /// Toolkit driving content generation for every tool endpoint.
    pub toolkit: Arc<CreatorToolkit<D>>,
}

impl<D: ContentDriver> AppState<D> {
    /// Wrap a toolkit for sharing across handlers.
    pub fn new(toolkit: CreatorToolkit<D>) -> Self {
        Self {
            toolkit: Arc::new(toolkit),
        }
    }
}

// Manual impl keeps Clone available without requiring D: Clone.
impl<D: ContentDriver> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            toolkit: Arc::clone(&self.toolkit),
        }
    }
}
