//! This module defines the severity levels and the `LogNode` capability that
//! every participant in the log-forwarding chain implements.
use std::error::Error;
use std::fmt;

/// Severity of a log record, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// A unit in the log-forwarding chain.
///
/// Each node performs its own work on the record and then, if it holds a
/// successor, hands the (possibly transformed) record onward. A node with no
/// successor ends the traversal silently.
///
/// Implementations must never panic or surface a failure out of `print`:
/// a broken node may at worst lose output, it must not disturb the caller.
pub trait LogNode: Send + Sync {
    /// Handles one log record.
    ///
    /// # Arguments
    ///
    /// * `level` - The severity of the record.
    /// * `tag` - A short identifier for the record's source. Implementations
    ///   treat an empty tag as valid input.
    /// * `message` - The message text. May be empty when `error` is present.
    /// * `error` - An optional failure attached to the record.
    fn print(&self, level: Level, tag: &str, message: &str, error: Option<&(dyn Error + 'static)>);
}
