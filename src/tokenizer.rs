//! Wrapper around the serialized tokenizer artifact.
//!
//! The tokenizer was built alongside the model during training and is
//! consumed here as an opaque file. The model expects every input as a
//! fixed-length id sequence, so encodings are post-padded or truncated
//! to [`MAX_LEN`].

use anyhow::{Context, Result};
use tokenizers::Tokenizer;

/// Fixed input length the model was trained with.
pub const MAX_LEN: usize = 400;
/// Id appended to short sequences.
pub const PAD_ID: u32 = 0;

pub struct TextTokenizer {
    inner: Tokenizer,
}

impl TextTokenizer {
    /// Loads the serialized tokenizer from disk. Fails if the file is
    /// missing or not a valid tokenizer, in which case the server runs in
    /// a permanent error state.
    pub fn from_file(path: &str) -> Result<Self> {
        let inner = Tokenizer::from_file(path)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("failed to load tokenizer from {path}"))?;
        Ok(Self { inner })
    }

    /// Encodes cleaned text into exactly [`MAX_LEN`] ids: padded with
    /// [`PAD_ID`] at the end, or truncated from the end.
    pub fn encode_padded(&self, text: &str) -> Result<Vec<u32>> {
        let encoding = self
            .inner
            .encode(text, false)
            .map_err(|e| anyhow::anyhow!("tokenizer encode failed: {e}"))?;
        Ok(pad_truncate(encoding.get_ids().to_vec()))
    }
}

fn pad_truncate(mut ids: Vec<u32>) -> Vec<u32> {
    ids.truncate(MAX_LEN);
    ids.resize(MAX_LEN, PAD_ID);
    ids
}
