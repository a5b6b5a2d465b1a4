/// Translation-pair corpora: in-memory and JSONL-file backed
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::TranslationCorpus;
use crate::{BitextError, Result};

/// One sentence expressed in several languages
///
/// Mirrors the `{"translation": {"en": "...", "it": "..."}}` record shape
/// that parallel-corpus exports use, so a corpus row deserializes straight
/// into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationPair {
    translation: HashMap<String, String>,
}

impl TranslationPair {
    /// Build a two-language pair
    pub fn new(src_lang: &str, src_text: &str, tgt_lang: &str, tgt_text: &str) -> Self {
        let mut translation = HashMap::new();
        translation.insert(src_lang.to_string(), src_text.to_string());
        translation.insert(tgt_lang.to_string(), tgt_text.to_string());
        Self { translation }
    }

    /// Sentence for a language code, if present
    pub fn text(&self, lang: &str) -> Option<&str> {
        self.translation.get(lang).map(String::as_str)
    }

    /// Language codes this pair covers
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.translation.keys().map(String::as_str)
    }
}

/// In-memory corpus
///
/// Backed by a plain `Vec`; useful for tests and small experiments where the
/// pairs are already in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    pairs: Vec<TranslationPair>,
}

impl MemoryCorpus {
    /// Create a corpus from pre-built pairs
    pub fn new(pairs: Vec<TranslationPair>) -> Self {
        Self { pairs }
    }
}

impl TranslationCorpus for MemoryCorpus {
    fn len(&self) -> usize {
        self.pairs.len()
    }

    fn get(&self, index: usize) -> Option<TranslationPair> {
        self.pairs.get(index).cloned()
    }
}

/// Corpus loaded from a newline-delimited JSON file
///
/// Each line holds one `{"translation": {...}}` record. Loading is strict:
/// a malformed line aborts the load with the offending line number rather
/// than silently dropping data.
pub struct JsonlCorpus {
    pairs: Vec<TranslationPair>,
}

impl JsonlCorpus {
    /// Load all pairs from a JSONL file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        log::info!("Loading translation corpus from: {:?}", path);

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut pairs = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;

            // Blank lines are tolerated (trailing newline etc.)
            if line.trim().is_empty() {
                continue;
            }

            let pair: TranslationPair = serde_json::from_str(&line).map_err(|e| {
                BitextError::Corpus(format!(
                    "{}:{}: malformed record: {}",
                    path.display(),
                    line_no + 1,
                    e
                ))
            })?;
            pairs.push(pair);
        }

        if pairs.is_empty() {
            log::warn!("Corpus file {:?} contains no translation pairs", path);
        } else {
            log::info!("Corpus loaded: {} translation pairs", pairs.len());
        }

        Ok(Self { pairs })
    }
}

impl TranslationCorpus for JsonlCorpus {
    fn len(&self) -> usize {
        self.pairs.len()
    }

    fn get(&self, index: usize) -> Option<TranslationPair> {
        self.pairs.get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("bitext_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_pair_lookup_by_language() {
        let pair = TranslationPair::new("en", "the cat", "it", "il gatto");

        assert_eq!(pair.text("en"), Some("the cat"));
        assert_eq!(pair.text("it"), Some("il gatto"));
        assert_eq!(pair.text("de"), None);
        assert_eq!(pair.languages().count(), 2);
    }

    #[test]
    fn test_pair_deserializes_from_corpus_record() {
        let record = r#"{"translation": {"en": "hello", "it": "ciao"}}"#;
        let pair: TranslationPair = serde_json::from_str(record).unwrap();

        assert_eq!(pair.text("en"), Some("hello"));
        assert_eq!(pair.text("it"), Some("ciao"));
    }

    #[test]
    fn test_memory_corpus_indexing() {
        let corpus = MemoryCorpus::new(vec![
            TranslationPair::new("en", "one", "it", "uno"),
            TranslationPair::new("en", "two", "it", "due"),
        ]);

        assert_eq!(corpus.len(), 2);
        assert!(!corpus.is_empty());
        assert_eq!(corpus.get(1).unwrap().text("it"), Some("due"));
        assert!(corpus.get(2).is_none());
    }

    #[test]
    fn test_jsonl_corpus_loads_records_in_order() -> Result<()> {
        let path = temp_path("corpus_ok.jsonl");
        let mut file = File::create(&path)?;
        writeln!(file, r#"{{"translation": {{"en": "one", "it": "uno"}}}}"#)?;
        writeln!(file, r#"{{"translation": {{"en": "two", "it": "due"}}}}"#)?;
        writeln!(file)?;
        drop(file);

        let corpus = JsonlCorpus::from_file(&path);
        std::fs::remove_file(&path).ok();

        let corpus = corpus?;
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(0).unwrap().text("en"), Some("one"));
        assert_eq!(corpus.get(1).unwrap().text("en"), Some("two"));

        Ok(())
    }

    #[test]
    fn test_jsonl_corpus_rejects_malformed_line() -> Result<()> {
        let path = temp_path("corpus_bad.jsonl");
        let mut file = File::create(&path)?;
        writeln!(file, r#"{{"translation": {{"en": "one", "it": "uno"}}}}"#)?;
        writeln!(file, "not json at all")?;
        drop(file);

        let result = JsonlCorpus::from_file(&path);
        std::fs::remove_file(&path).ok();

        match result {
            Err(BitextError::Corpus(msg)) => {
                assert!(msg.contains(":2:"), "error should name line 2: {}", msg)
            }
            other => panic!("expected corpus error, got {:?}", other.map(|c| c.len())),
        }

        Ok(())
    }

    #[test]
    fn test_jsonl_corpus_missing_file_errors() {
        let result = JsonlCorpus::from_file("no/such/corpus.jsonl");
        assert!(matches!(result, Err(BitextError::Io(_))));
    }
}
