/// Walkthrough: raw sentence pairs to transformer-ready tensors
use std::collections::BTreeSet;
use std::sync::Arc;

use bitext_data::{
    causal_mask, BitextConfig, HuggingFaceTokenizer, MemoryCorpus, TranslationDataset,
    TranslationPair,
};
use candle_core::Device;
use serde_json::json;

/// Build a WordLevel tokenizer over whatever words the given sentences use
///
/// Stand-in for a real tokenizer file; actual training runs would load a
/// trained tokenizer.json with `HuggingFaceTokenizer::from_file`.
fn word_level_tokenizer(sentences: &[&str]) -> anyhow::Result<HuggingFaceTokenizer> {
    let mut vocab = serde_json::Map::new();
    for (id, token) in ["[UNK]", "[PAD]", "[SOS]", "[EOS]"].iter().enumerate() {
        vocab.insert((*token).to_string(), json!(id));
    }

    let words: BTreeSet<&str> = sentences
        .iter()
        .flat_map(|s| s.split_whitespace())
        .collect();
    for (offset, word) in words.into_iter().enumerate() {
        vocab.insert(word.to_string(), json!(4 + offset));
    }

    let tokenizer_json = json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [],
        "normalizer": null,
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": vocab,
            "unk_token": "[UNK]"
        }
    });

    Ok(HuggingFaceTokenizer::from_bytes(
        tokenizer_json.to_string().as_bytes(),
    )?)
}

fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("=== Bilingual Data Preparation Walkthrough ===");

    let device = Device::Cpu;
    log::info!("Using device: {:?}", device);

    // Tiny in-memory corpus; real runs would use JsonlCorpus::from_file
    let pairs = vec![
        TranslationPair::new("en", "the cat sleeps", "it", "il gatto dorme"),
        TranslationPair::new("en", "the dog runs", "it", "il cane corre"),
        TranslationPair::new("en", "a red fox", "it", "una volpe rossa"),
        TranslationPair::new("en", "the fox sleeps", "it", "la volpe dorme"),
    ];

    let src_sentences: Vec<&str> = pairs.iter().filter_map(|p| p.text("en")).collect();
    let tgt_sentences: Vec<&str> = pairs.iter().filter_map(|p| p.text("it")).collect();

    let src_tokenizer = Arc::new(word_level_tokenizer(&src_sentences)?);
    let tgt_tokenizer = Arc::new(word_level_tokenizer(&tgt_sentences)?);
    log::info!("Source vocab size: {}", src_tokenizer.vocab_size());
    log::info!("Target vocab size: {}", tgt_tokenizer.vocab_size());

    let config = BitextConfig {
        seq_len: 10,
        ..BitextConfig::default()
    };

    let dataset = TranslationDataset::new(
        MemoryCorpus::new(pairs),
        src_tokenizer.clone(),
        tgt_tokenizer.clone(),
        config,
        &device,
    )?;

    log::info!("Dataset ready:");
    log::info!("  - Pairs: {}", dataset.len());
    log::info!("  - Sequence length: {}", dataset.seq_len());
    log::info!(
        "  - Sentinels: sos={}, eos={}, pad={}",
        dataset.sos_id(),
        dataset.eos_id(),
        dataset.pad_id()
    );

    // First pair in full detail
    let example = dataset.get(0)?;
    log::info!(
        "Example 0: {:?} -> {:?}",
        example.src_text,
        example.tgt_text
    );
    log::info!(
        "  - encoder_input: {:?}",
        example.encoder_input.to_vec1::<i64>()?
    );
    log::info!(
        "  - decoder_input: {:?}",
        example.decoder_input.to_vec1::<i64>()?
    );
    log::info!("  - label:         {:?}", example.label.to_vec1::<i64>()?);
    log::info!(
        "  - encoder_mask {:?}, decoder_mask {:?}",
        example.encoder_mask.dims(),
        example.decoder_mask.dims()
    );

    // Remaining pairs, a quick summary each
    for index in 1..dataset.len() {
        let example = dataset.get(index)?;
        let ids = example.encoder_input.to_vec1::<i64>()?;
        let used = ids.iter().filter(|&&t| t != dataset.pad_id()).count();
        log::info!(
            "Example {}: {:?} -> {:?} ({} of {} encoder positions used)",
            index,
            example.src_text,
            example.tgt_text,
            used,
            dataset.seq_len()
        );
    }

    // The causal square on its own (row = query, col = key)
    let mask = causal_mask(5, &device)?;
    log::info!("Causal mask 5x5:");
    for row in mask.to_vec2::<u8>()? {
        log::info!("  {:?}", row);
    }

    // Oversized pairs fail rather than truncate; the caller decides what to do
    let tight = TranslationDataset::new(
        MemoryCorpus::new(vec![TranslationPair::new(
            "en",
            "the cat sleeps",
            "it",
            "il gatto dorme",
        )]),
        src_tokenizer,
        tgt_tokenizer,
        BitextConfig {
            seq_len: 4,
            ..BitextConfig::default()
        },
        &device,
    )?;
    match tight.get(0) {
        Ok(_) => log::info!("Pair fits in seq_len 4"),
        Err(err) => log::warn!("Skipping oversized pair: {}", err),
    }

    log::info!("=== Walkthrough Complete ===");

    Ok(())
}
