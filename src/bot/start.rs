use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::{api::ApiClient, config::Config, error::AppError};

use super::handler::Handler;

/// Starts the Discord bot in a blocking manner.
///
/// Creates the serenity client with the shared handler state and runs it for
/// the process lifetime. The update scheduler is started from the `ready`
/// event once the gateway session is established.
///
/// # Arguments
/// - `config` - Application configuration
/// - `api` - Client for the news/price API
///
/// # Returns
/// - `Ok(())` if the bot shuts down cleanly
/// - `Err(AppError)` if client initialization or the connection fails
pub async fn start_bot(config: Arc<Config>, api: ApiClient) -> Result<(), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in the Discord
    // Developer Portal for the command responder to see message text.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(config.clone(), api);

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown.
    client.start().await?;

    Ok(())
}
