//! Client for the model inference sidecar.
//!
//! The trained network lives in a separate process (the Python sidecar that
//! also produced the artifacts). This module only knows its wire contract:
//! a fixed-length id sequence in, one sigmoid probability out.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ScoreRequest<'a> {
    ids: &'a [u32],
}

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    score: f32,
}

pub struct RemoteScorer {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteScorer {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// One-shot startup probe. The model server either answers now or the
    /// process serves a permanent error state; there is no lazy retry later.
    pub async fn probe(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("model server unreachable at {url}. Is the sidecar running?"))?;
        if !res.status().is_success() {
            return Err(anyhow!("model server health check failed: {}", res.status()));
        }
        Ok(())
    }

    /// Scores a padded id sequence, returning the positive-sentiment
    /// probability in [0, 1].
    pub async fn score(&self, ids: &[u32]) -> Result<f32> {
        let url = format!("{}/model/score", self.base_url);
        let res = self
            .client
            .post(&url)
            .json(&ScoreRequest { ids })
            .send()
            .await
            .context("model server request failed")?;

        if !res.status().is_success() {
            return Err(anyhow!("model server returned {}", res.status()));
        }

        let body: ScoreResponse = res
            .json()
            .await
            .context("model server response parse error")?;
        Ok(body.score)
    }
}
