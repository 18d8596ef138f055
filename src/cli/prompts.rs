//! Warning, error, and prompt messages for CLI output.

use std::io::Write;

use crossterm::style::Stylize;

/// Message sink honouring `--quiet`. Errors are always shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prompts {
    quiet: bool,
}

impl Prompts {
    pub fn new(quiet: bool) -> Self {
        Prompts { quiet }
    }

    /// Skip interactive prompts when quiet or when stdin is not a tty.
    fn skip_prompt(&self) -> bool {
        self.quiet || unsafe { libc::isatty(0) != 1 }
    }

    /// Print an error to stderr (red).
    pub fn error(&self, msg: &str) {
        if unsafe { libc::isatty(2) == 1 } {
            eprintln!("{}", msg.red());
        } else {
            eprintln!("{msg}");
        }
    }

    pub fn clipboard_copied(&self, count: usize) {
        if !self.quiet {
            println!("*** {count} password(s) -COPIED TO CLIPBOARD- ***");
        }
    }

    pub fn clipboard_error(&self, err: &str) {
        self.error(&format!("Clipboard error: {err}"));
    }

    /// Ask whether to print to the terminal when the clipboard is unavailable.
    /// Quiet or non-interactive runs fall back silently.
    pub fn clipboard_fallback(&self) -> bool {
        if self.skip_prompt() {
            return true;
        }

        eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err() {
            return true;
        }
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }

        eprintln!("\nAborted.");
        false
    }
}
