/// Data marshaling modules for seq2seq training
pub mod bilingual;
pub mod corpus;
pub mod mask;

pub use bilingual::{TrainingExample, TranslationDataset};
pub use corpus::{JsonlCorpus, MemoryCorpus, TranslationPair};
pub use mask::causal_mask;

/// Generic corpus of translation pairs
///
/// The backing store is external to this crate; anything that can report a
/// count and hand out one pair per index works. Implementations must be
/// `Send + Sync` (read-only concurrent access from data-loading workers).
pub trait TranslationCorpus: Send + Sync {
    /// Total number of translation pairs
    fn len(&self) -> usize;

    /// Get the pair at `index`, or `None` past the end
    fn get(&self, index: usize) -> Option<TranslationPair>;

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
