//! Messages the CLI writes to stderr around the generated passwords.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::style::Stylize;
use entropass::GeneratedPassword;

/// Fatal errors are shown even with `--quiet`.
pub fn fatal(err: &anyhow::Error) {
    eprintln!("{}", format!("error: {err:#}").red());
}

/// Status output for one run; `--quiet` silences all of it.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn notice(&self, msg: &str) {
        if !self.quiet {
            eprintln!("{}", msg.yellow());
        }
    }

    pub fn summary(&self, password: &GeneratedPassword, source: &str) {
        if !self.quiet {
            eprintln!("{}", summary_line(password, source));
        }
    }

    pub fn copied(&self, count: usize) {
        if !self.quiet {
            eprintln!("{count} password(s) copied to clipboard");
        }
    }

    /// Ask whether to print instead when the clipboard cannot be opened.
    ///
    /// Without a terminal on stdin, or in quiet mode, the answer is yes.
    pub fn confirm_print_fallback(&self) -> bool {
        let stdin = io::stdin();
        if self.quiet || !stdin.is_terminal() {
            return true;
        }

        eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
        let _ = io::stderr().flush();
        let mut answer = String::new();
        match stdin.lock().read_line(&mut answer) {
            Ok(_) => accepts(&answer),
            Err(_) => true,
        }
    }
}

fn summary_line(password: &GeneratedPassword, source: &str) -> String {
    format!(
        "Entropy: {} bits ({}) \u{2022} Charset: {} chars \u{2022} Source: {}",
        password.entropy_display(),
        password.strength(),
        password.charset_size(),
        source
    )
}

/// Empty input defaults to yes.
fn accepts(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}
