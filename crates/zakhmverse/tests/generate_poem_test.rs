//! End-to-end caller flow: request in, outcome out, history retained.
//!
//! Mirrors what an app sitting on this library does after each
//! generation: show the poem or the message, and push successes into a
//! history store.

use async_trait::async_trait;
use zakhmverse::{
    GeminiError, GeminiErrorKind, GeneratedPoem, HistoryEntry, HistoryStore,
    InMemoryHistoryStore, PoemDriver, PoemOutcome, PoemPipeline, PoemRequest, ZakhmverseResult,
    GENERATION_FAILED, INVALID_INPUT,
};

struct StubDriver {
    poem: Option<String>,
}

#[async_trait]
impl PoemDriver for StubDriver {
    async fn generate(&self, _instruction: &str) -> ZakhmverseResult<GeneratedPoem> {
        match &self.poem {
            Some(poem) => Ok(GeneratedPoem::new(poem)),
            None => Err(GeminiError::new(GeminiErrorKind::ApiRequest(
                "model overloaded".to_string(),
            ))
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

/// One turn of the app loop: generate, then retain a success.
async fn generate_and_retain(
    pipeline: &PoemPipeline<StubDriver>,
    store: &InMemoryHistoryStore,
    request: &PoemRequest,
) -> PoemOutcome {
    let outcome = pipeline.generate(request).await;
    if let Some(poem) = outcome.as_poem() {
        store
            .save(HistoryEntry::new(request.prompt(), poem))
            .await
            .unwrap();
    }
    outcome
}

#[tokio::test]
async fn successful_generation_lands_in_history() {
    let pipeline = PoemPipeline::new(StubDriver {
        poem: Some("Still water holds the sky".to_string()),
    });
    let store = InMemoryHistoryStore::new();
    let request = PoemRequest::from_prompt("a quiet lake at dawn");

    let outcome = generate_and_retain(&pipeline, &store, &request).await;

    assert_eq!(outcome.as_poem(), Some("Still water holds the sky"));
    let recent = store.recent(10).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].prompt(), "a quiet lake at dawn");
    assert_eq!(recent[0].poem(), "Still water holds the sky");
}

#[tokio::test]
async fn failed_generation_leaves_history_untouched() {
    let pipeline = PoemPipeline::new(StubDriver { poem: None });
    let store = InMemoryHistoryStore::new();
    let request = PoemRequest::from_prompt("a quiet lake at dawn");

    let outcome = generate_and_retain(&pipeline, &store, &request).await;

    assert_eq!(outcome.as_error(), Some(GENERATION_FAILED));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn invalid_request_leaves_history_untouched() {
    let pipeline = PoemPipeline::new(StubDriver {
        poem: Some("never returned".to_string()),
    });
    let store = InMemoryHistoryStore::new();
    let request = PoemRequest::from_prompt("   ");

    let outcome = generate_and_retain(&pipeline, &store, &request).await;

    assert_eq!(outcome.as_error(), Some(INVALID_INPUT));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn history_keeps_newest_first_across_turns() {
    let store = InMemoryHistoryStore::new();
    for n in 1..=3 {
        let pipeline = PoemPipeline::new(StubDriver {
            poem: Some(format!("poem {n}")),
        });
        let request = PoemRequest::from_prompt(format!("prompt {n}"));
        generate_and_retain(&pipeline, &store, &request).await;
    }

    let recent = store.recent(10).await.unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].poem(), "poem 3");
    assert_eq!(recent[2].poem(), "poem 1");
}

#[tokio::test]
async fn outcome_wire_shape_matches_the_contract() {
    let pipeline = PoemPipeline::new(StubDriver {
        poem: Some("A verse".to_string()),
    });
    let request = PoemRequest::from_prompt("anything");

    let outcome = pipeline.generate(&request).await;
    let json = serde_json::to_string(&outcome).unwrap();

    assert_eq!(json, r#"{"poem":"A verse"}"#);
}
