//! The generation pipeline and its failure boundary.

use crate::{template, validator};
use std::time::Instant;
use tracing::{debug, error, instrument, warn};
use zakhmverse_core::{PoemOutcome, PoemRequest};
use zakhmverse_interface::PoemDriver;

/// User-facing message for a rejected request.
pub const INVALID_INPUT: &str = "Invalid input.";
/// User-facing message for a failed generation call.
pub const GENERATION_FAILED: &str = "Failed to generate poem. Please try again later.";

/// Runs poem requests through validation, template assembly, and the
/// generation backend, shaping every result into a [`PoemOutcome`].
///
/// This is the only failure boundary in the library. Lower layers fail
/// loudly with typed errors; this type logs their detail and returns one
/// of two fixed user-facing messages. Callers never see provider
/// internals, status codes, or validation specifics.
///
/// The pipeline holds no per-request state, so one instance serves
/// concurrent calls.
pub struct PoemPipeline<D: PoemDriver> {
    driver: D,
}

impl<D: PoemDriver> PoemPipeline<D> {
    /// Create a pipeline around a generation backend.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The underlying generation backend.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generate a poem for a raw request.
    ///
    /// Always returns a well-formed outcome: exactly one of a poem or a
    /// short user-facing message. An invalid request never reaches the
    /// backend.
    #[instrument(skip(self, request), fields(provider = self.driver.provider_name()))]
    pub async fn generate(&self, request: &PoemRequest) -> PoemOutcome {
        let validated = match validator::validate(request) {
            Ok(validated) => validated,
            Err(e) => {
                warn!(error = %e, "Rejected invalid request");
                return PoemOutcome::error(INVALID_INPUT);
            }
        };

        let instruction = template::assemble(&validated);
        debug!(
            model = %self.driver.model_name(),
            instruction_len = instruction.len(),
            "Dispatching generation request"
        );

        let start = Instant::now();
        match self.driver.generate(&instruction).await {
            Ok(poem) => {
                debug!(
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Generation succeeded"
                );
                PoemOutcome::from(poem)
            }
            Err(e) => {
                error!(
                    duration_ms = start.elapsed().as_millis() as u64,
                    error = %e,
                    "Generation failed"
                );
                PoemOutcome::error(GENERATION_FAILED)
            }
        }
    }
}
