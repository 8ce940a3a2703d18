use anyhow::Result;
use consulmap::{copy_with_fallback, ClipboardError, CopyOutcome, CopyStrategy};

use super::load_config;

/// Primary: the system clipboard.
struct SystemClipboard;

impl CopyStrategy for SystemClipboard {
    fn name(&self) -> &'static str { "system clipboard" }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let fail = |e: arboard::Error| ClipboardError { strategy: self.name(), reason: e.to_string() };
        let mut clipboard = arboard::Clipboard::new().map_err(fail)?;
        clipboard.set_text(text.to_string()).map_err(fail)
    }
}

/// Fallback: print it so the operator can copy by hand.
struct Stdout;

impl CopyStrategy for Stdout {
    fn name(&self) -> &'static str { "stdout" }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        use std::io::Write;

        writeln!(std::io::stdout(), "{text}")
            .map_err(|e| ClipboardError { strategy: self.name(), reason: e.to_string() })
    }
}

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::ContactArgs) -> Result<()> {
    let email = match &args.email {
        Some(email) => email.clone(),
        None => load_config(cli)?.contact_email,
    };

    match copy_with_fallback(&email, &mut [&mut SystemClipboard, &mut Stdout]) {
        CopyOutcome::Copied { strategy } => eprintln!("Email copied! ({strategy})"),
        CopyOutcome::Failed => eprintln!("Could not copy {email}"),
    }
    Ok(())
}
