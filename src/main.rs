mod api;
mod bot;
mod config;
mod error;
mod ledger;
mod scheduler;
mod service;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{api::ApiClient, config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env()?);
    let api = ApiClient::new(config.api_base_url.clone(), config.api_token.clone());

    bot::start::start_bot(config, api).await
}
