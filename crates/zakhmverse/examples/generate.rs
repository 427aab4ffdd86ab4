//! Generate a poem with the live Gemini backend.
//!
//! ```text
//! GEMINI_API_KEY=... cargo run -p zakhmverse --example generate
//! ```

use tracing_subscriber::EnvFilter;
use zakhmverse::{
    GeminiClient, GeminiConfig, HistoryEntry, HistoryStore, InMemoryHistoryStore, PoemPipeline,
    PoemRequest,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();

    let client = GeminiClient::from_env(GeminiConfig::default())?;
    let pipeline = PoemPipeline::new(client);
    let history = InMemoryHistoryStore::new();

    let request = PoemRequest::builder()
        .prompt("a silent forest under new snow")
        .mood("reflective")
        .style("haiku")
        .build()?;

    let outcome = pipeline.generate(&request).await;

    if let Some(poem) = outcome.as_poem() {
        println!("{poem}\n");
        history
            .save(HistoryEntry::new(request.prompt(), poem))
            .await?;
        println!("history now holds {} entries", history.len().await);
    } else if let Some(message) = outcome.as_error() {
        eprintln!("{message}");
    }

    Ok(())
}
