//! This module provides the terminal sink of the log chain: an in-memory
//! transcript that an on-screen observer can follow as it grows.
use super::node::{Level, LogNode};
use std::collections::VecDeque;
use std::error::Error;
use std::sync::Mutex;

/// A callback invoked with each line appended to the view.
pub type ChangeListener = Box<dyn Fn(&str) + Send + Sync>;

/// The chain terminus: appends each received message as a new transcript
/// line and notifies registered listeners that content changed.
///
/// The transcript is capped; once full, the oldest lines are evicted first.
/// Level and tag are ignored here, the upstream filter has already reduced
/// the record to display text.
pub struct LogView {
    lines: Mutex<VecDeque<String>>,
    max_lines: usize,
    listeners: Mutex<Vec<ChangeListener>>,
}

impl LogView {
    /// Creates a view holding at most `max_lines` transcript lines.
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::with_capacity(max_lines.min(1024))),
            max_lines,
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Registers a listener called with every appended line.
    ///
    /// The CLI uses this to echo the transcript to the screen as it grows,
    /// the way a scroll-follow widget would.
    pub fn add_change_listener(&self, listener: ChangeListener) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(listener);
        }
    }

    /// Returns a snapshot of the current transcript lines.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Returns the transcript as a single newline-joined string.
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }

    fn append(&self, message: &str) {
        {
            let Ok(mut lines) = self.lines.lock() else { return };
            while lines.len() >= self.max_lines {
                if lines.pop_front().is_none() {
                    break;
                }
            }
            lines.push_back(message.to_string());
        }

        if let Ok(listeners) = self.listeners.lock() {
            for listener in listeners.iter() {
                listener(message);
            }
        }
    }
}

impl LogNode for LogView {
    fn print(&self, _level: Level, _tag: &str, message: &str, _error: Option<&(dyn Error + 'static)>) {
        self.append(message);
    }
}
