//! This module contains the log-forwarding chain for the application.
//!
//! Records enter through the [`facade`] functions and travel a singly-linked
//! chain of [`LogNode`]s, each doing its own work and handing the record to
//! its successor. The default chain taps `tracing`, strips the record to its
//! message text, and lands in an on-screen [`LogView`] transcript.
pub mod facade;
pub mod filter;
pub mod node;
pub mod view;
pub mod wrapper;

#[cfg(test)]
pub mod test_support;

pub use filter::MessageOnlyLogFilter;
pub use node::{Level, LogNode};
pub use view::LogView;
pub use wrapper::LogWrapper;
