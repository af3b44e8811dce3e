//! Key-pair sign/verify demo built around a pluggable log-forwarding chain.
//!
//! Application code logs through the facade in [`logging`]; the installed
//! chain taps `tracing`, reduces each record to message text, and appends it
//! to an on-screen transcript. The [`crypto`] module supplies the in-memory
//! key store the demo commands operate on.
pub mod app;
pub mod crypto;
pub mod logging;
