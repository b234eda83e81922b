use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::insight::GenerationRequest;

/// Abstraction over a generative-text service.
///
/// The insight generator only knows this trait; swapping the backing service
/// (or mocking it in tests) touches nothing else.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Generate text for `request`.
    ///
    /// An empty string is a valid answer ("the service had nothing to say");
    /// transport failures and unreadable responses are errors.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, CoreError>;
}
