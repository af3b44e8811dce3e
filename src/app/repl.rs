//! This module runs the interactive command loop that drives the demo.
//!
//! Each command maps to one key-store operation, and every outcome — success
//! or any of the closed set of failure kinds — becomes a line through the
//! log chain, so the transcript view mirrors what happened.
use crate::crypto::{KeyStore, KeyStoreError};
use crate::logging::{facade, LogView};
use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::Arc;

const TAG: &str = "repl";

/// The alias the demo key pair is stored under. The string used to refer to
/// a stored pair is an "alias"; one store can hold many pairs.
const ALIAS: &str = "myKey";

/// Sample data to sign, and later verify against the produced signature.
const SAMPLE_INPUT: &str = "Hello, world!";

/// Outcome of handling one command line.
enum Flow {
    Continue,
    Quit,
}

/// The demo's interactive state: the key store plus the signature kept
/// between `sign` and `verify`.
pub struct Repl {
    store: KeyStore,
    view: Arc<LogView>,
    signature: Option<String>,
}

impl Repl {
    pub fn new(store: KeyStore, view: Arc<LogView>) -> Self {
        Self {
            store,
            view,
            signature: None,
        }
    }

    /// Reads and handles commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error when the line editor fails for a reason other than
    /// an interrupt or end of input.
    pub fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new()?;

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = editor.add_history_entry(line);
                    if matches!(self.handle(line), Flow::Quit) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        println!("👋 Goodbye!");
        Ok(())
    }

    fn handle(&mut self, line: &str) -> Flow {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "create" => self.create_keys(),
            "sign" => self.sign(rest),
            "verify" => self.verify(rest),
            "log" => self.show_transcript(),
            "help" => print_help(),
            "quit" | "exit" => return Flow::Quit,
            other => println!("Unknown command '{other}', try {}.", "help".cyan()),
        }

        Flow::Continue
    }

    fn create_keys(&mut self) {
        let public = self.store.create_keys(ALIAS);
        facade::debug(TAG, "Keys created", None);
        facade::info(
            TAG,
            &format!("Public key fingerprint: {}", public.fingerprint()),
            None,
        );
    }

    fn sign(&mut self, text: &str) {
        let data = if text.is_empty() { SAMPLE_INPUT } else { text };

        match self.store.sign(ALIAS, data.as_bytes()) {
            Ok(signature) => {
                facade::debug(TAG, &format!("Signature: {signature}"), None);
                self.signature = Some(signature);
            }
            Err(e) => match &e {
                KeyStoreError::UnknownAlias(_) => {
                    facade::warn(TAG, "No key pair yet, run 'create' first", Some(&e));
                }
                _ => facade::warn(TAG, "Signing failed", Some(&e)),
            },
        }
    }

    fn verify(&mut self, text: &str) {
        let data = if text.is_empty() { SAMPLE_INPUT } else { text };

        let Some(signature) = self.signature.clone() else {
            facade::warn(TAG, "Nothing signed yet, run 'sign' first", None);
            return;
        };

        match self.store.verify(ALIAS, data.as_bytes(), &signature) {
            Ok(true) => facade::debug(TAG, "Data Signature Verified", None),
            Ok(false) => facade::debug(TAG, "Data not verified.", None),
            Err(e) => match &e {
                KeyStoreError::UnknownAlias(_) => {
                    facade::warn(TAG, "No key pair yet, run 'create' first", Some(&e));
                }
                KeyStoreError::MalformedSignature(_) => {
                    facade::warn(TAG, "Stored signature is not valid base64", Some(&e));
                }
                KeyStoreError::BadSignatureLength(_) => {
                    facade::warn(TAG, "Stored signature has the wrong length", Some(&e));
                }
            },
        }
    }

    fn show_transcript(&self) {
        let text = self.view.text();
        if text.is_empty() {
            println!("(transcript is empty)");
        } else {
            println!("{}", "--- transcript ---".dimmed());
            println!("{text}");
            println!("{}", "------------------".dimmed());
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  {}          generate a key pair under the demo alias", "create".cyan());
    println!("  {}   sign TEXT (default: \"{SAMPLE_INPUT}\")", "sign [TEXT]".cyan());
    println!("  {} check the last signature against TEXT", "verify [TEXT]".cyan());
    println!("  {}             print the on-screen log transcript", "log".cyan());
    println!("  {}            leave the demo", "quit".cyan());
}
