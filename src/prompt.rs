//! Alert and confirmation primitives offered to the administrator

use std::io::{self, BufRead, Write};

/// Blocking dialogs shown by the console handlers
#[cfg_attr(test, mockall::automock)]
pub trait Prompt: Send + Sync {
    /// Show a message
    fn alert(&self, message: &str);

    /// Ask a yes/no question; `false` when declined
    fn confirm(&self, message: &str) -> bool;
}

/// Terminal-backed prompt.
///
/// With `assume_yes` every confirmation is accepted without reading stdin.
#[derive(Debug, Clone, Default)]
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for TerminalPrompt {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let mut stderr = io::stderr();
        if write!(stderr, "{} [y/N] ", message).and_then(|_| stderr.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "예" | "네")
}
