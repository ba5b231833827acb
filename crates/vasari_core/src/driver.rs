//! Driver trait for text generation backends.

use crate::{GenerateRequest, GenerateResponse};
use async_trait::async_trait;
use vasari_error::VasariResult;

/// A text generation backend.
///
/// The dispatch layer is generic over this trait so production code can use
/// the Gemini client while tests substitute mocks.
#[async_trait]
pub trait ContentDriver: Send + Sync {
    /// Issue one generation call and return the generated text.
    async fn generate(&self, req: &GenerateRequest) -> VasariResult<GenerateResponse>;

    /// Name of the backing provider.
    fn provider_name(&self) -> &'static str;

    /// Model identifier this driver dispatches against.
    fn model_name(&self) -> &str;
}
