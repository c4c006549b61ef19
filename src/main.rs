mod config;
mod server;
mod tokenizer;

use std::sync::Arc;

use clap::Parser;
use config::ServerConfig;
use log::{error, info};
use server::AppState;
use tokenizer::Tokenizer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = ServerConfig::parse();

    // Nothing is bound until the tokenizer has loaded
    let tokenizer = match Tokenizer::load_from_file(&config.tokenizer_path) {
        Ok(t) => t,
        Err(err) => {
            error!("{}", err);
            return Err(err.into());
        }
    };

    if let Some(max) = config.max_input_bytes {
        info!("Rejecting inputs longer than {} bytes", max);
    }

    let state = AppState::new(Arc::new(tokenizer), config.max_input_bytes);
    if let Err(err) = server::serve(&config.bind_addr(), state).await {
        error!("Server on {} failed: {}", config.bind_addr(), err);
        return Err(err.into());
    }

    info!("Server stopped");
    Ok(())
}
