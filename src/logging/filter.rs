//! This module reduces log records to bare message text.
use super::node::{Level, LogNode};
use std::error::Error;
use std::sync::Arc;

/// Strips a record down to its message for plain-text display.
///
/// Tag and error detail are noise in a transcript view, so the tag is
/// cleared and an attached error is folded into the message text. The level
/// passes through as received; the downstream sink ignores it either way.
pub struct MessageOnlyLogFilter {
    next: Option<Arc<dyn LogNode>>,
}

impl MessageOnlyLogFilter {
    /// Creates a filter that ends the chain.
    pub fn new() -> Self {
        Self { next: None }
    }

    /// Creates a filter that forwards the reduced record to `next`.
    pub fn with_next(next: Arc<dyn LogNode>) -> Self {
        Self { next: Some(next) }
    }
}

impl Default for MessageOnlyLogFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogNode for MessageOnlyLogFilter {
    fn print(&self, level: Level, _tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        let Some(next) = &self.next else { return };

        // An error-only record must still produce a visible line.
        let reduced = match error {
            Some(e) if message.is_empty() => e.to_string(),
            Some(e) => format!("{message}: {e}"),
            None => message.to_string(),
        };

        next.print(level, "", &reduced, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::test_support::RecordingNode;
    use anyhow::anyhow;

    #[test]
    fn keeps_only_the_message_text() {
        let next = Arc::new(RecordingNode::default());
        let filter = MessageOnlyLogFilter::with_next(next.clone());

        filter.print(Level::Info, "MainActivity", "hello", None);

        let records = next.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "hello");
        assert_eq!(records[0].tag, "");
        assert!(records[0].error.is_none());
    }

    #[test]
    fn folds_an_attached_error_into_the_text() {
        let next = Arc::new(RecordingNode::default());
        let filter = MessageOnlyLogFilter::with_next(next.clone());

        let err = anyhow!("key not found");
        filter.print(Level::Warn, "store", "signing failed", Some(err.as_ref()));

        assert_eq!(next.records()[0].message, "signing failed: key not found");
    }

    #[test]
    fn error_only_record_still_yields_a_line() {
        let next = Arc::new(RecordingNode::default());
        let filter = MessageOnlyLogFilter::with_next(next.clone());

        let err = anyhow!("key not found");
        filter.print(Level::Error, "store", "", Some(err.as_ref()));

        assert_eq!(next.records()[0].message, "key not found");
    }

    #[test]
    fn drops_silently_at_chain_end() {
        let filter = MessageOnlyLogFilter::new();
        filter.print(Level::Info, "tag", "nowhere to go", None);
    }
}
