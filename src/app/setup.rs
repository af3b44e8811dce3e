//! This module handles the initial setup of the application.
use super::args::AppArgs;
use crate::crypto::KeyStore;
use crate::logging::{facade, LogView, LogWrapper, MessageOnlyLogFilter};
use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const TAG: &str = "setup";

/// Contains all the necessary components for the application to run.
///
/// This struct is created by the `prepare` function and passed to the
/// command loop.
pub struct PreparedApp {
    /// The in-memory key store.
    pub store: KeyStore,
    /// The on-screen log transcript, also installed as the chain's sink.
    pub view: Arc<LogView>,
}

/// Prepares the application for running.
///
/// This function performs the following steps:
/// 1. Configures the `tracing` console output.
/// 2. Prints a start banner.
/// 3. Assembles and installs the log-forwarding chain.
/// 4. Creates the in-memory key store.
///
/// # Errors
///
/// This function currently cannot fail, but keeps a `Result` return so
/// setup steps that can (e.g. terminal initialization) slot in without
/// touching callers.
pub fn prepare(args: AppArgs) -> Result<PreparedApp> {
    configure_logging(args.filter.as_deref());
    print_start_banner();

    let view = initialize_logging(&args);
    let store = KeyStore::new();

    facade::info(TAG, "Ready", None);

    Ok(PreparedApp { store, view })
}

/// Configures the `tracing` console output.
///
/// Console events go to stderr so they do not interleave with the transcript
/// echo on stdout.
fn configure_logging(filter: Option<&str>) {
    let env_filter = match filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Creates the chain of targets that will receive log data.
///
/// The chain taps the `tracing` console, strips records down to message
/// text, and lands in the on-screen transcript:
/// `LogWrapper -> MessageOnlyLogFilter -> LogView`.
///
/// Safe to call again; the freshly built chain replaces the previous one
/// wholesale.
fn initialize_logging(args: &AppArgs) -> Arc<LogView> {
    let view = Arc::new(LogView::new(args.log_lines));

    // Follow the transcript on screen, the way a scroll-to-bottom view would.
    if !args.quiet {
        view.add_change_listener(Box::new(|line| println!("{line}")));
    }

    let msg_filter = Arc::new(MessageOnlyLogFilter::with_next(view.clone()));
    let log_wrapper = Arc::new(LogWrapper::with_next(msg_filter));
    facade::set_log_node(Some(log_wrapper));

    view
}

/// Prints a banner with startup information.
fn print_start_banner() {
    println!("{}", "🔑 KeyStore sign/verify demo".bold());
    println!("Type {} for the list of commands.", "help".cyan());
    println!();
}
