//! Ready event handler for bot initialization.
//!
//! The `ready` event fires when the bot successfully connects to Discord's
//! gateway and completes the initial handshake. It is the point where the
//! update scheduler is started, since both scheduled cycles need a live
//! session to post messages and set the presence.

use std::sync::atomic::Ordering;

use serenity::all::{Context, Ready};

use crate::scheduler;

use super::Handler;

/// Handles the ready event when the bot connects to Discord.
///
/// Starts the update scheduler exactly once; a reconnect re-fires `ready` but
/// the already-running scheduler is left alone.
pub async fn handle_ready(handler: &Handler, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if handler.scheduler_started.swap(true, Ordering::SeqCst) {
        tracing::debug!("Reconnected; update scheduler already running");
        return;
    }

    if let Err(e) = scheduler::start_scheduler(
        ctx,
        handler.api.clone(),
        handler.config.clone(),
        handler.ledger.clone(),
    )
    .await
    {
        tracing::error!("Failed to start update scheduler: {}", e);
    }
}
