//! This module bridges the log chain to the `tracing` ecosystem.
use super::node::{Level, LogNode};
use std::error::Error;
use std::sync::Arc;

/// A pass-through tap that writes every record to the `tracing` subscriber
/// before handing it, unmodified, to the next node.
///
/// The record's tag travels as a `tag` field on the emitted event; an
/// attached error is folded into the event text the way a console log line
/// would carry it. Downstream nodes still receive the original arguments.
pub struct LogWrapper {
    next: Option<Arc<dyn LogNode>>,
}

impl LogWrapper {
    /// Creates a wrapper that ends the chain after its own write.
    pub fn new() -> Self {
        Self { next: None }
    }

    /// Creates a wrapper that forwards to `next` after its own write.
    pub fn with_next(next: Arc<dyn LogNode>) -> Self {
        Self { next: Some(next) }
    }
}

impl Default for LogWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl LogNode for LogWrapper {
    fn print(&self, level: Level, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        let text = match error {
            Some(e) => format!("{message}: {e}"),
            None => message.to_string(),
        };

        match level {
            Level::Debug => tracing::debug!(tag, "{}", text),
            Level::Info => tracing::info!(tag, "{}", text),
            Level::Warn => tracing::warn!(tag, "{}", text),
            Level::Error => tracing::error!(tag, "{}", text),
        }

        if let Some(next) = &self.next {
            next.print(level, tag, message, error);
        }
    }
}
