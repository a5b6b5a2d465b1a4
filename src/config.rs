/// Configuration for the bilingual dataset adapter
///
/// Chooses which two languages to read out of each translation pair, the
/// fixed sequence length every example is padded to, and the surface forms
/// of the sentinel tokens resolved from the tokenizer vocabularies.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BitextConfig {
    /// Language code of the encoder side (e.g. "en")
    pub src_lang: String,

    /// Language code of the decoder side (e.g. "it")
    pub tgt_lang: String,

    /// Fixed length of every emitted sequence, special tokens included
    pub seq_len: usize,

    /// Surface form of the start-of-sequence token
    pub sos_token: String,

    /// Surface form of the end-of-sequence token
    pub eos_token: String,

    /// Surface form of the padding token
    pub pad_token: String,
}

impl Default for BitextConfig {
    fn default() -> Self {
        Self {
            src_lang: "en".to_string(),
            tgt_lang: "it".to_string(),
            seq_len: 350,
            sos_token: "[SOS]".to_string(),
            eos_token: "[EOS]".to_string(),
            pad_token: "[PAD]".to_string(),
        }
    }
}

impl BitextConfig {
    /// Validate configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.src_lang.is_empty() || self.tgt_lang.is_empty() {
            return Err(crate::BitextError::Config(
                "src_lang and tgt_lang must be non-empty".to_string(),
            ));
        }

        // An empty source sentence still needs SOS + EOS on the encoder side
        if self.seq_len < 2 {
            return Err(crate::BitextError::Config(format!(
                "seq_len must be >= 2, got {}",
                self.seq_len
            )));
        }

        if self.sos_token.is_empty() || self.eos_token.is_empty() || self.pad_token.is_empty() {
            return Err(crate::BitextError::Config(
                "special token strings must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Number of content tokens the encoder side can hold (seq_len minus SOS and EOS)
    pub fn max_src_tokens(&self) -> usize {
        self.seq_len - 2
    }

    /// Number of content tokens the decoder side can hold (seq_len minus SOS)
    pub fn max_tgt_tokens(&self) -> usize {
        self.seq_len - 1
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }
}
