//! Generation backend trait.

use async_trait::async_trait;
use zakhmverse_core::GeneratedPoem;
use zakhmverse_error::ZakhmverseResult;

/// A backend that can compose a poem from an assembled instruction.
///
/// Implementations send the instruction to a generation service together
/// with the structured output contract (a JSON object with one required
/// `poem` string) and return the parsed result. A call makes exactly one
/// attempt; there is no retry or backoff at this layer.
///
/// The pipeline is generic over this trait, which is also the seam for
/// test doubles: a mock driver that echoes or fails stands in for the
/// network without touching pipeline code.
#[async_trait]
pub trait PoemDriver: Send + Sync {
    /// Generate a poem from the assembled instruction.
    ///
    /// # Errors
    ///
    /// Fails when the remote call does not complete or the response does
    /// not honor the structured output contract.
    async fn generate(&self, instruction: &str) -> ZakhmverseResult<GeneratedPoem>;

    /// Provider name for logs and traces, e.g. "gemini".
    fn provider_name(&self) -> &'static str;

    /// Model identifier this driver targets.
    fn model_name(&self) -> &str;
}
