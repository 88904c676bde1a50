//! The prediction pipeline: normalize, tokenize, score, classify.

use anyhow::Result;

use crate::classifier::{classify, Classification};
use crate::model::RemoteScorer;
use crate::text::clean_text;
use crate::tokenizer::TextTokenizer;

/// Immutable prediction engine, constructed once at startup and shared
/// read-only across all requests. Holds the loaded tokenizer artifact and
/// the client for the model sidecar.
pub struct SentimentEngine {
    tokenizer: TextTokenizer,
    scorer: RemoteScorer,
}

impl SentimentEngine {
    /// Loads the tokenizer and verifies the model server is reachable.
    /// Any failure here is permanent for the process lifetime.
    pub async fn load(tokenizer_path: &str, model_server_url: &str) -> Result<Self> {
        let tokenizer = TextTokenizer::from_file(tokenizer_path)?;
        let scorer = RemoteScorer::new(model_server_url);
        scorer.probe().await?;
        tracing::info!(
            tokenizer = tokenizer_path,
            model_server = model_server_url,
            "model and tokenizer loaded successfully"
        );
        Ok(Self { tokenizer, scorer })
    }

    /// Runs one message through the full pipeline.
    pub async fn predict(&self, message: &str) -> Result<Classification> {
        let cleaned = clean_text(message);
        let ids = self.tokenizer.encode_padded(&cleaned)?;
        let score = self.scorer.score(&ids).await?;
        Ok(classify(score))
    }
}
