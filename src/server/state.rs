//! Shared handler state

use std::sync::Arc;

use crate::tokenizer::Encoder;

/// Cloned into every request; the encoder is shared, never copied
#[derive(Clone)]
pub struct AppState {
    pub encoder: Arc<dyn Encoder>,
    pub max_input_bytes: Option<usize>,
}

impl AppState {
    pub fn new(encoder: Arc<dyn Encoder>, max_input_bytes: Option<usize>) -> Self {
        Self { encoder, max_input_bytes }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::tokenizer::{Encoder, Encoding, TokenizerError};

    /// One id per whitespace-separated word, equal to the word's length
    pub(crate) struct WhitespaceEncoder;

    impl Encoder for WhitespaceEncoder {
        fn encode(&self, text: &str) -> Result<Encoding, TokenizerError> {
            let ids: Vec<u32> = text.split_whitespace().map(|w| w.len() as u32).collect();
            let attention_mask = vec![1; ids.len()];
            Ok(Encoding { ids, attention_mask })
        }
    }

    pub(crate) struct FailingEncoder;

    impl Encoder for FailingEncoder {
        fn encode(&self, _text: &str) -> Result<Encoding, TokenizerError> {
            Err(TokenizerError::Encode("corrupted internal state".to_string()))
        }
    }
}
