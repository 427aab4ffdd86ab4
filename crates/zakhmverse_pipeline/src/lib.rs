//! Prompt-to-poem generation pipeline for ZakhmVerse.
//!
//! Four stages: [`validator`] rejects unserviceable requests,
//! [`template`] assembles the model instruction, a
//! [`zakhmverse_interface::PoemDriver`] performs the remote call, and
//! [`PoemPipeline`] shapes whatever happened into the caller-facing
//! [`zakhmverse_core::PoemOutcome`].

mod pipeline;
pub mod template;
pub mod validator;

pub use pipeline::{PoemPipeline, GENERATION_FAILED, INVALID_INPUT};
