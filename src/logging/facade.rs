//! This module provides the process-wide logging facade.
//!
//! The facade holds the only reference to the head of the log-forwarding
//! chain. It does no formatting or filtering of its own; each leveled call
//! stamps the fixed level and hands the record to the head node, or does
//! nothing when no chain is installed.
//!
//! Lifecycle contract: assemble the whole chain first, then publish it with
//! [`set_log_node`]. Replacing the chain while other threads are logging is
//! safe memory-wise (the head sits behind a lock) but records in flight on
//! the old chain still finish there, so reconfigure between bursts.
use super::node::{Level, LogNode};
use std::error::Error;
use std::sync::{Arc, RwLock};

static HEAD: RwLock<Option<Arc<dyn LogNode>>> = RwLock::new(None);

/// Installs `node` as the head of the chain, replacing any previous chain
/// wholesale. Passing `None` uninstalls the chain and turns all logging
/// calls into no-ops.
pub fn set_log_node(node: Option<Arc<dyn LogNode>>) {
    if let Ok(mut head) = HEAD.write() {
        *head = node;
    }
}

/// Logs a debug-level record.
pub fn debug(tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
    dispatch(Level::Debug, tag, message, error);
}

/// Logs an info-level record.
pub fn info(tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
    dispatch(Level::Info, tag, message, error);
}

/// Logs a warn-level record.
pub fn warn(tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
    dispatch(Level::Warn, tag, message, error);
}

/// Logs an error-level record.
pub fn error(tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
    dispatch(Level::Error, tag, message, error);
}

fn dispatch(level: Level, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>) {
    // A poisoned lock means some node panicked; logging stays best-effort
    // and drops the record rather than propagating.
    let Ok(head) = HEAD.read() else { return };
    if let Some(node) = head.as_ref() {
        node.print(level, tag, message, error);
    }
}
