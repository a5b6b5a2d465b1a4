//! bitext-data - bilingual sentence pairs to training tensors
//!
//! A dataset adapter for sequence-to-sequence transformer training: given a
//! corpus of translation pairs and a tokenizer per language, each indexed
//! lookup yields fixed-length encoder/decoder/label tensors together with
//! the padding and causal attention masks the model consumes.
//!
//! # Layout
//!
//! Every example is padded to one `seq_len` chosen at construction:
//! - **encoder input**: `[SOS] tokens.. [EOS] [PAD]..`
//! - **decoder input**: `[SOS] tokens.. [PAD]..` (teacher forcing, no EOS)
//! - **label**: `tokens.. [EOS] [PAD]..` (decoder input shifted by one)
//!
//! # Example
//!
//! ```ignore
//! use bitext_data::{BitextConfig, HuggingFaceTokenizer, JsonlCorpus, TranslationDataset};
//!
//! let corpus = JsonlCorpus::from_file("opus_books.jsonl")?;
//! let src_tok = HuggingFaceTokenizer::from_file("tokenizer_en.json")?;
//! let tgt_tok = HuggingFaceTokenizer::from_file("tokenizer_it.json")?;
//! let dataset = TranslationDataset::new(
//!     corpus,
//!     std::sync::Arc::new(src_tok),
//!     std::sync::Arc::new(tgt_tok),
//!     BitextConfig::default(),
//!     &candle_core::Device::Cpu,
//! )?;
//! let example = dataset.get(0)?;
//! ```

pub mod config;
pub mod data;
pub mod tokenizer;

// Re-export commonly used items
pub use config::BitextConfig;
pub use data::bilingual::{TrainingExample, TranslationDataset};
pub use data::corpus::{JsonlCorpus, MemoryCorpus, TranslationPair};
pub use data::mask::causal_mask;
pub use data::TranslationCorpus;
pub use tokenizer::{HuggingFaceTokenizer, SentenceTokenizer};

/// Library error types
#[derive(Debug, thiserror::Error)]
pub enum BitextError {
    #[error("Candle error: {0}")]
    Candle(#[from] candle_core::Error),

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("Sequence too long: {tokens} {lang} tokens plus special tokens exceed seq_len {seq_len}")]
    SequenceTooLong {
        lang: String,
        tokens: usize,
        seq_len: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BitextError>;
