//! Console implementations of the engine's presentation traits.

use std::io::{self, BufRead, Write};

use clementine_cart::{CheckoutPrompt, Notifier, NoticeKind};

/// Notifier that prints notices to stdout with a kind tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        let tag = match kind {
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warn",
            NoticeKind::Error => "error",
            NoticeKind::Success => "ok",
        };
        println!("[{tag}] {message}");
    }
}

/// Prompt that asks for a y/N confirmation on the terminal.
///
/// Anything other than `y`/`yes` (case-insensitive) cancels, as does a
/// closed stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompt;

impl CheckoutPrompt for ConsolePrompt {
    fn confirm(&self, message: &str) -> bool {
        print!("{message} Proceed? [y/N] ");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
