//! Discord bot integration.
//!
//! This module owns the serenity client and event handling. The handler holds
//! the shared state for the whole bot: the configuration, the API client, and
//! the seen-article ledger. Scheduled work (presence updates, news posting)
//! is started from the `ready` event and runs on the same shared state.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` / `GUILD_MESSAGES` / `DIRECT_MESSAGES` - Receive message events
//!   for the command responder
//! - `MESSAGE_CONTENT` - Read message text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
