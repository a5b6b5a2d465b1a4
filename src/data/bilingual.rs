/// Bilingual dataset adapter: one translation pair in, fixed-length tensors out
///
/// Wraps a [`TranslationCorpus`] and a tokenizer per language. Each indexed
/// lookup tokenizes one pair, pads both sides to the configured seq_len and
/// emits the tensors a seq2seq transformer trains on: encoder input, decoder
/// input (teacher forcing), label, and the padding/causal attention masks.
use std::sync::Arc;

use candle_core::{Device, Tensor};

use super::mask::causal_mask;
use super::TranslationCorpus;
use crate::config::BitextConfig;
use crate::tokenizer::SentenceTokenizer;
use crate::{BitextError, Result};

/// One fixed-length training example
///
/// All tensors live on the device the dataset was constructed with. Id
/// tensors are I64, masks are U8 with 1 meaning "attendable".
#[derive(Debug, Clone)]
pub struct TrainingExample {
    /// `[seq_len]` I64: SOS, source tokens, EOS, then padding
    pub encoder_input: Tensor,
    /// `[seq_len]` I64: SOS, target tokens, then padding (no EOS)
    pub decoder_input: Tensor,
    /// `[seq_len]` I64: target tokens, EOS, then padding
    pub label: Tensor,
    /// `[1, 1, seq_len]` U8: 1 where the encoder position is not padding
    pub encoder_mask: Tensor,
    /// `[1, seq_len, seq_len]` U8: padding mask combined with the causal mask
    pub decoder_mask: Tensor,
    /// Raw source sentence, kept for debugging
    pub src_text: String,
    /// Raw target sentence, kept for debugging
    pub tgt_text: String,
}

/// Dataset adapter over a translation corpus and two tokenizers
///
/// Constructed once per training run with a fixed seq_len. Sentinel ids are
/// resolved from the tokenizer vocabularies up front and the causal mask is
/// precomputed once, so `get` does no per-example setup work.
///
/// Calls to [`get`](Self::get) are pure and share no mutable state, so the
/// dataset can be used from parallel data-loading workers as long as the
/// corpus and tokenizers tolerate concurrent reads.
pub struct TranslationDataset<C: TranslationCorpus> {
    corpus: C,
    src_tokenizer: Arc<dyn SentenceTokenizer>,
    tgt_tokenizer: Arc<dyn SentenceTokenizer>,
    config: BitextConfig,
    sos_id: i64,
    eos_id: i64,
    pad_id: i64,
    causal: Tensor,
    device: Device,
}

impl<C: TranslationCorpus> TranslationDataset<C> {
    /// Create a new dataset adapter
    ///
    /// # Arguments
    /// * `corpus` - Indexed collection of translation pairs
    /// * `src_tokenizer` - Tokenizer for the encoder-side language
    /// * `tgt_tokenizer` - Tokenizer for the decoder-side language
    /// * `config` - Languages, seq_len and sentinel token strings
    /// * `device` - Device all emitted tensors are created on
    ///
    /// Fails if the config is invalid, if the target tokenizer cannot
    /// resolve any of the three sentinel tokens, or if the source tokenizer
    /// maps the pad token to a different id than the target tokenizer.
    pub fn new(
        corpus: C,
        src_tokenizer: Arc<dyn SentenceTokenizer>,
        tgt_tokenizer: Arc<dyn SentenceTokenizer>,
        config: BitextConfig,
        device: &Device,
    ) -> Result<Self> {
        config.validate()?;

        // Sentinel ids come from the target tokenizer, resolved once
        let sos_id = resolve_special(tgt_tokenizer.as_ref(), &config.sos_token, "target")?;
        let eos_id = resolve_special(tgt_tokenizer.as_ref(), &config.eos_token, "target")?;
        let pad_id = resolve_special(tgt_tokenizer.as_ref(), &config.pad_token, "target")?;

        // One pad id masks both sides, so the source vocabulary has to agree
        // or encoder masking would be silently wrong
        let src_pad = resolve_special(src_tokenizer.as_ref(), &config.pad_token, "source")?;
        if src_pad != pad_id {
            return Err(BitextError::Tokenizer(format!(
                "pad id mismatch: source tokenizer maps {} to {}, target tokenizer to {}",
                config.pad_token, src_pad, pad_id
            )));
        }

        // Deterministic per seq_len, reused by every example
        let causal = causal_mask(config.seq_len, device)?;

        log::info!(
            "Translation dataset ready: {} pairs, {} -> {}, seq_len={}, sos={}, eos={}, pad={}",
            corpus.len(),
            config.src_lang,
            config.tgt_lang,
            config.seq_len,
            sos_id,
            eos_id,
            pad_id
        );

        Ok(Self {
            corpus,
            src_tokenizer,
            tgt_tokenizer,
            config,
            sos_id: i64::from(sos_id),
            eos_id: i64::from(eos_id),
            pad_id: i64::from(pad_id),
            causal,
            device: device.clone(),
        })
    }

    /// Number of translation pairs in the underlying corpus
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.corpus.len() == 0
    }

    /// Fixed length of every emitted sequence
    pub fn seq_len(&self) -> usize {
        self.config.seq_len
    }

    /// Start-of-sequence id
    pub fn sos_id(&self) -> i64 {
        self.sos_id
    }

    /// End-of-sequence id
    pub fn eos_id(&self) -> i64 {
        self.eos_id
    }

    /// Padding id
    pub fn pad_id(&self) -> i64 {
        self.pad_id
    }

    /// Build the fixed-length example for the pair at `index`
    ///
    /// Pure function of the index and construction state: no caching, no
    /// mutation, same tensors every call.
    ///
    /// Fails with [`BitextError::SequenceTooLong`] when a tokenized sentence
    /// plus its sentinels cannot fit in seq_len; there is no truncation
    /// fallback, the caller decides whether to skip or abort.
    pub fn get(&self, index: usize) -> Result<TrainingExample> {
        let pair = self.corpus.get(index).ok_or_else(|| {
            BitextError::Corpus(format!(
                "index {} out of bounds ({} pairs)",
                index,
                self.corpus.len()
            ))
        })?;

        let src_text = pair
            .text(&self.config.src_lang)
            .ok_or_else(|| {
                BitextError::Corpus(format!(
                    "pair {} has no {} sentence",
                    index, self.config.src_lang
                ))
            })?
            .to_string();
        let tgt_text = pair
            .text(&self.config.tgt_lang)
            .ok_or_else(|| {
                BitextError::Corpus(format!(
                    "pair {} has no {} sentence",
                    index, self.config.tgt_lang
                ))
            })?
            .to_string();

        let src_tokens = self.src_tokenizer.encode(&src_text)?;
        let tgt_tokens = self.tgt_tokenizer.encode(&tgt_text)?;

        let seq_len = self.config.seq_len;

        // The encoder carries SOS and EOS, the decoder input only SOS
        let enc_padding = seq_len.checked_sub(src_tokens.len() + 2).ok_or_else(|| {
            BitextError::SequenceTooLong {
                lang: self.config.src_lang.clone(),
                tokens: src_tokens.len(),
                seq_len,
            }
        })?;
        let dec_padding = seq_len.checked_sub(tgt_tokens.len() + 1).ok_or_else(|| {
            BitextError::SequenceTooLong {
                lang: self.config.tgt_lang.clone(),
                tokens: tgt_tokens.len(),
                seq_len,
            }
        })?;

        // encoder input: [SOS] src [EOS] pad..
        let mut encoder_ids = Vec::with_capacity(seq_len);
        encoder_ids.push(self.sos_id);
        encoder_ids.extend(src_tokens.iter().map(|&id| i64::from(id)));
        encoder_ids.push(self.eos_id);
        encoder_ids.extend(std::iter::repeat(self.pad_id).take(enc_padding));

        // decoder input: [SOS] tgt pad.. (teacher forcing, no EOS)
        let mut decoder_ids = Vec::with_capacity(seq_len);
        decoder_ids.push(self.sos_id);
        decoder_ids.extend(tgt_tokens.iter().map(|&id| i64::from(id)));
        decoder_ids.extend(std::iter::repeat(self.pad_id).take(dec_padding));

        // label: tgt [EOS] pad.. (decoder input shifted left by one)
        let mut label_ids = Vec::with_capacity(seq_len);
        label_ids.extend(tgt_tokens.iter().map(|&id| i64::from(id)));
        label_ids.push(self.eos_id);
        label_ids.extend(std::iter::repeat(self.pad_id).take(dec_padding));

        // Padding arithmetic must land exactly on seq_len
        assert_eq!(encoder_ids.len(), seq_len);
        assert_eq!(decoder_ids.len(), seq_len);
        assert_eq!(label_ids.len(), seq_len);

        let encoder_input = Tensor::from_vec(encoder_ids, seq_len, &self.device)?;
        let decoder_input = Tensor::from_vec(decoder_ids, seq_len, &self.device)?;
        let label = Tensor::from_vec(label_ids, seq_len, &self.device)?;

        // [seq_len] -> [1, 1, seq_len], broadcastable over heads and queries
        let encoder_mask = encoder_input.ne(self.pad_id)?.unsqueeze(0)?.unsqueeze(0)?;

        // Padding row ANDed with the causal square: [1, 1, S] * [S, S] -> [1, S, S]
        let decoder_mask = decoder_input
            .ne(self.pad_id)?
            .unsqueeze(0)?
            .unsqueeze(0)?
            .broadcast_mul(&self.causal)?;

        Ok(TrainingExample {
            encoder_input,
            decoder_input,
            label,
            encoder_mask,
            decoder_mask,
            src_text,
            tgt_text,
        })
    }
}

/// Resolve a sentinel token through a tokenizer, failing if the vocabulary lacks it
fn resolve_special(
    tokenizer: &dyn SentenceTokenizer,
    token: &str,
    side: &str,
) -> Result<u32> {
    tokenizer
        .token_to_id(token)
        .ok_or_else(|| BitextError::Tokenizer(format!("{} tokenizer has no {} token", side, token)))
}
