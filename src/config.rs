//! Command-line configuration for the tokenize server

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_TOKENIZER_PATH: &str = "models/all-MiniLM-L6-v2/tokenizer.json";

/// Serve `POST /tokenize` backed by a Hugging Face tokenizer
#[derive(Debug, Clone, Parser)]
#[command(name = "tokenize_server", version, about)]
pub struct ServerConfig {
    /// Path to the tokenizer.json file loaded at startup
    #[arg(long, default_value = DEFAULT_TOKENIZER_PATH)]
    pub tokenizer_path: PathBuf,

    /// Host to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// HTTP port
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Reject texts longer than this many bytes (unbounded when unset)
    #[arg(long)]
    pub max_input_bytes: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            tokenizer_path: PathBuf::from(DEFAULT_TOKENIZER_PATH),
            host: "127.0.0.1".to_string(),
            port: 8000,
            max_input_bytes: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
