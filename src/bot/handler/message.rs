//! Message event handler: the chat command responder.

use serenity::all::{Context, CreateMessage, Message};

use crate::api::Quote;
use crate::bot::command::Command;
use crate::service::price;

use super::Handler;

const PRICE_UNAVAILABLE_REPLY: &str =
    "Sorry, I couldn't fetch market data right now. Please try again in a bit.";

/// Handles message creation in a channel.
///
/// Bot-authored messages are dropped first to prevent feedback loops. Text
/// that does not parse as a known command gets no reply at all.
pub async fn handle_message(handler: &Handler, ctx: Context, message: Message) {
    let Some(command) = command_for(
        message.author.bot,
        &message.content,
        &handler.config.command_prefix,
    ) else {
        return;
    };

    match command {
        Command::Help => {
            reply_text(&ctx, &message, &help_text(&handler.config.command_prefix)).await;
        }
        Command::Price => {
            let quote = price::latest_quote(&handler.api, &handler.config.currency).await;
            let builder = price_message(quote);

            if let Err(e) = message.channel_id.send_message(&ctx.http, builder).await {
                tracing::error!("Failed to send price reply: {}", e);
            }
        }
        Command::News => {
            let text = format!(
                "The latest crypto headlines are posted in <#{}>.",
                handler.config.news_channel_id
            );
            reply_text(&ctx, &message, &text).await;
        }
    }
}

/// Decides whether a message gets a command response at all.
///
/// Bot authors never get one, regardless of content; everyone else goes
/// through the command grammar.
fn command_for(author_is_bot: bool, content: &str, prefix: &str) -> Option<Command> {
    if author_is_bot {
        return None;
    }

    Command::parse(content, prefix)
}

/// Builds the reply for the `price` command: the quote card when market data
/// is available, the fixed apology otherwise.
fn price_message(quote: Option<Quote>) -> CreateMessage {
    match quote {
        Some(quote) => CreateMessage::new().embed(price::quote_embed(&quote)),
        None => CreateMessage::new().content(PRICE_UNAVAILABLE_REPLY),
    }
}

async fn reply_text(ctx: &Context, message: &Message, text: &str) {
    if let Err(e) = message.channel_id.say(&ctx.http, text).await {
        tracing::error!("Failed to send command reply: {}", e);
    }
}

fn help_text(prefix: &str) -> String {
    format!(
        "**Coinwatch commands**\n\
         `{prefix} price` - current Bitcoin price, 24h change, and market cap\n\
         `{prefix} news` - where the latest headlines are posted\n\
         `{prefix} help` - this message"
    )
}
