/// Tokenizer collaborators for the dataset adapter
///
/// The adapter never tokenizes text itself; it talks to a pair of
/// [`SentenceTokenizer`]s, one per language. [`HuggingFaceTokenizer`] wraps
/// the `tokenizers` crate, which is what real training runs use.
use std::path::Path;

use crate::{BitextError, Result};

/// Contract the dataset adapter requires from a tokenizer
///
/// Implementations must be `Send + Sync` so the dataset can be shared across
/// parallel data-loading workers; both operations are read-only.
pub trait SentenceTokenizer: Send + Sync {
    /// Encode a sentence into token ids, without adding any special tokens
    ///
    /// The adapter inserts its own SOS/EOS/PAD sentinels, so implementations
    /// must return the raw content ids only.
    fn encode(&self, text: &str) -> Result<Vec<u32>>;

    /// Resolve a special-token string (e.g. "[PAD]") to its vocabulary id
    fn token_to_id(&self, token: &str) -> Option<u32>;
}

/// HuggingFace `tokenizers` backend
///
/// Thin wrapper over [`tokenizers::Tokenizer`]; loading, vocabulary and
/// encoding all live in the external crate.
pub struct HuggingFaceTokenizer {
    inner: tokenizers::Tokenizer,
}

impl HuggingFaceTokenizer {
    /// Load a tokenizer from a `tokenizer.json` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let inner = tokenizers::Tokenizer::from_file(path.as_ref()).map_err(|e| {
            BitextError::Tokenizer(format!(
                "failed to load tokenizer from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(Self { inner })
    }

    /// Parse a tokenizer from in-memory `tokenizer.json` bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let inner = tokenizers::Tokenizer::from_bytes(bytes)
            .map_err(|e| BitextError::Tokenizer(format!("failed to parse tokenizer: {}", e)))?;
        Ok(Self { inner })
    }

    /// Wrap an already-loaded HuggingFace tokenizer
    pub fn from_tokenizer(inner: tokenizers::Tokenizer) -> Self {
        Self { inner }
    }

    /// Vocabulary size, added tokens included
    pub fn vocab_size(&self) -> usize {
        self.inner.get_vocab_size(true)
    }
}

impl SentenceTokenizer for HuggingFaceTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<u32>> {
        let encoding = self
            .inner
            .encode(text, false)
            .map_err(|e| BitextError::Tokenizer(format!("encode failed: {}", e)))?;
        Ok(encoding.get_ids().to_vec())
    }

    fn token_to_id(&self, token: &str) -> Option<u32> {
        self.inner.token_to_id(token)
    }
}
