//! Test doubles shared by the logging unit tests.
use super::node::{Level, LogNode};
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

/// A materialized copy of one record seen by a [`RecordingNode`].
#[derive(Debug, Clone)]
pub struct Record {
    pub level: Level,
    pub tag: String,
    pub message: String,
    pub error: Option<String>,
}

/// A chain node that records every record it sees, then forwards unchanged.
#[derive(Default)]
pub struct RecordingNode {
    records: Mutex<Vec<Record>>,
    next: Option<Arc<dyn LogNode>>,
}

impl RecordingNode {
    pub fn with_next(next: Arc<dyn LogNode>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next: Some(next),
        }
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }
}

impl LogNode for RecordingNode {
    fn print(&self, level: Level, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.records.lock().unwrap().push(Record {
            level,
            tag: tag.to_string(),
            message: message.to_string(),
            error: error.map(|e| e.to_string()),
        });
        if let Some(next) = &self.next {
            next.print(level, tag, message, error);
        }
    }
}

/// A chain node that appends its label to a shared ledger, for asserting
/// traversal order across a whole chain.
pub struct TraceNode {
    label: &'static str,
    ledger: Arc<Mutex<Vec<&'static str>>>,
    next: Option<Arc<dyn LogNode>>,
}

impl TraceNode {
    pub fn new(
        label: &'static str,
        ledger: Arc<Mutex<Vec<&'static str>>>,
        next: Option<Arc<dyn LogNode>>,
    ) -> Self {
        Self {
            label,
            ledger,
            next,
        }
    }
}

impl LogNode for TraceNode {
    fn print(&self, level: Level, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.ledger.lock().unwrap().push(self.label);
        if let Some(next) = &self.next {
            next.print(level, tag, message, error);
        }
    }
}

/// Serializes tests that touch the process-wide facade head.
pub fn facade_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(Mutex::default)
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}
