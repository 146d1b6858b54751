use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;
use tokio::sync::Mutex;

use crate::{api::ApiClient, config::Config, ledger::SeenLedger};

pub mod message;
pub mod ready;

/// Discord bot event handler.
///
/// Owns all shared state: the configuration, the API client, and the
/// seen-article ledger. The ledger is only ever touched through its mutex,
/// from the news cycle.
pub struct Handler {
    pub config: Arc<Config>,
    pub api: ApiClient,
    pub ledger: Arc<Mutex<SeenLedger>>,
    /// Set once the update scheduler is running; `ready` can fire again on a
    /// gateway reconnect and must not start a second scheduler.
    pub scheduler_started: AtomicBool,
}

impl Handler {
    pub fn new(config: Arc<Config>, api: ApiClient) -> Self {
        let ledger = Arc::new(Mutex::new(SeenLedger::new(config.seen_capacity)));

        Self {
            config,
            api,
            ledger,
            scheduler_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self, ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self, ctx, message).await;
    }
}
