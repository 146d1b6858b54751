//! Chat command grammar.
//!
//! Only messages starting with the configured prefix are considered; the
//! remainder is trimmed and matched against the three known commands.
//! Anything else, including an empty remainder, is silently ignored.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Price,
    News,
}

impl Command {
    pub fn parse(content: &str, prefix: &str) -> Option<Self> {
        let remainder = content.strip_prefix(prefix)?;

        match remainder.trim() {
            "help" => Some(Self::Help),
            "price" => Some(Self::Price),
            "news" => Some(Self::News),
            _ => None,
        }
    }
}
