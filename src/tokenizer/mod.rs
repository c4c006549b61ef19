/// Tokenizer module for converting text to token IDs and attention masks
///
/// Request handlers only see the `Encoder` trait, so the tokenizer loaded at
/// startup can be swapped for a test double.
pub mod huggingface;

pub use huggingface::Tokenizer;

use thiserror::Error;

/// Output of a single encode call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// Token ids in input order
    pub ids: Vec<u32>,
    /// One entry per id: 1 for real content, 0 for padding
    pub attention_mask: Vec<u32>,
}

/// Text to token conversion, shared read-only across requests
pub trait Encoder: Send + Sync {
    fn encode(&self, text: &str) -> Result<Encoding, TokenizerError>;
}

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("Failed to load tokenizer from {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("Failed to encode text: {0}")]
    Encode(String),
}
