//! The main entry point for the keysign-demo application.
use anyhow::Result;

/// Parses command-line arguments and runs the interactive demo.
///
/// # Errors
///
/// Returns an error if the terminal line editor fails or a setup step
/// cannot complete.
fn main() -> Result<()> {
    keysign_demo::app::launch()
}
