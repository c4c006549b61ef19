use std::path::Path;

use log::info;

use super::{Encoder, Encoding, TokenizerError};

/// Hugging Face tokenizer wrapper for the tokenize server
///
/// Wraps `tokenizers::Tokenizer` loaded from a `tokenizer.json` file.
///
/// # Thread Safety
/// The underlying tokenizer is `Send + Sync` and `encode` takes `&self`,
/// so one instance serves every request without locking.
pub struct Tokenizer {
    inner: tokenizers::Tokenizer,
}

impl Tokenizer {
    /// Load a tokenizer from a `tokenizer.json` file
    ///
    /// # Errors
    /// Returns `TokenizerError::Load` if:
    /// - The file cannot be opened or read
    /// - The file is not a valid tokenizer definition
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, TokenizerError> {
        let path = path.as_ref();
        let inner = tokenizers::Tokenizer::from_file(path).map_err(|e| TokenizerError::Load {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let tokenizer = Self { inner };
        info!(
            "Loaded tokenizer from {} (vocab size: {})",
            path.display(),
            tokenizer.vocab_size()
        );
        Ok(tokenizer)
    }

    /// Number of entries in the vocabulary, added tokens included
    pub fn vocab_size(&self) -> usize {
        self.inner.get_vocab_size(true)
    }
}

impl Encoder for Tokenizer {
    /// Special tokens are added, matching the library default; padding and
    /// truncation are whatever the tokenizer file configures.
    fn encode(&self, text: &str) -> Result<Encoding, TokenizerError> {
        let encoding = self
            .inner
            .encode(text, true)
            .map_err(|e| TokenizerError::Encode(e.to_string()))?;

        Ok(Encoding {
            ids: encoding.get_ids().to_vec(),
            attention_mask: encoding.get_attention_mask().to_vec(),
        })
    }
}
