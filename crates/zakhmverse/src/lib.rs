//! ZakhmVerse: a prompt-to-poem generation library.
//!
//! Callers describe the poem they want as a [`PoemRequest`] (a prompt
//! plus optional mood, language, style, length, keywords, and rhyme
//! constraints). The [`PoemPipeline`] validates the request, assembles a
//! deterministic instruction, sends it to a generation backend with a
//! structured output contract, and always hands back a [`PoemOutcome`]:
//! either the poem or one of two fixed user-facing messages. Successful
//! poems can be retained caller-side through a [`HistoryStore`].
//!
//! This facade re-exports the whole public surface; depend on it unless
//! you need a single layer.
//!
//! # Examples
//!
//! ```no_run
//! use zakhmverse::{GeminiClient, GeminiConfig, PoemPipeline, PoemRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = GeminiClient::from_env(GeminiConfig::default()).unwrap();
//!     let pipeline = PoemPipeline::new(client);
//!
//!     let request = PoemRequest::builder()
//!         .prompt("a quiet lake at dawn")
//!         .mood("reflective")
//!         .style("haiku")
//!         .build()
//!         .unwrap();
//!
//!     let outcome = pipeline.generate(&request).await;
//!     match outcome.as_poem() {
//!         Some(poem) => println!("{poem}"),
//!         None => eprintln!("{}", outcome.as_error().unwrap_or_default()),
//!     }
//! }
//! ```

pub use zakhmverse_core::{GeneratedPoem, HistoryEntry, PoemOutcome, PoemRequest, PoemRequestBuilder};
pub use zakhmverse_error::{
    ConfigError, ConfigErrorKind, GeminiError, GeminiErrorKind, StorageError, StorageErrorKind,
    ValidationError, ValidationErrorKind, ZakhmverseError, ZakhmverseErrorKind, ZakhmverseResult,
};
pub use zakhmverse_interface::PoemDriver;
pub use zakhmverse_models::{GeminiClient, GeminiConfig, GeminiConfigBuilder};
pub use zakhmverse_pipeline::{template, validator, PoemPipeline, GENERATION_FAILED, INVALID_INPUT};
pub use zakhmverse_storage::{HistoryStore, InMemoryHistoryStore, HISTORY_CAP};
