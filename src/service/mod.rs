//! Domain services behind the bot's scheduled cycles and commands.

pub mod news;
pub mod price;
