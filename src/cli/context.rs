//! CLI context - bundles settings, flags, and clipboard state.

use anyhow::{Context as _, Result};
use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use entropass::{Config, GeneratedPassword, Generator};

use super::{CliFlags, Reporter, print_help};

/// Application context for CLI mode.
pub struct Context {
    pub config: Config,
    pub flags: CliFlags,
    report: Reporter,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Parse command-line arguments and load the settings file if one was given.
    pub fn new(args: &[String]) -> Result<Self> {
        let flags = super::parse(args)?;

        let mut config = match flags.config {
            Some(ref path) => {
                Config::load(path).with_context(|| format!("failed to load settings from {path}"))?
            }
            None => Config::default(),
        };
        flags.apply(&mut config);

        Ok(Self {
            config,
            report: Reporter::new(flags.quiet),
            flags,
            clipboard: None,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        if self.flags.help {
            print_help();
            return Ok(());
        }
        if self.flags.version {
            println!("entropass {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        if self.flags.clipboard && !self.open_clipboard() {
            return Ok(());
        }

        let generator = Generator::detect();
        if !generator.random_source().has_secure() {
            self.report
                .notice("Warning: /dev/urandom not available, using hardware entropy only");
        }

        let count = self.flags.count.unwrap_or(1);
        let passwords = generator
            .generate_batch(&self.config, count)
            .context("password generation failed")?;

        if self.flags.show_entropy
            && let Some(first) = passwords.first()
        {
            self.report
                .summary(first, generator.random_source().source_name());
        }

        self.output(&passwords)
    }

    /// Returns false if the user declined the terminal fallback.
    fn open_clipboard(&mut self) -> bool {
        match ClipboardContext::new() {
            Ok(c) => {
                self.clipboard = Some(c);
                true
            }
            Err(e) => {
                log::debug!("clipboard unavailable: {e}");
                self.report.confirm_print_fallback()
            }
        }
    }

    fn output(&mut self, passwords: &[GeneratedPassword]) -> Result<()> {
        let Some(ctx) = self.clipboard.as_mut() else {
            for password in passwords {
                println!("{}", password.as_str());
            }
            return Ok(());
        };

        let mut joined = passwords
            .iter()
            .map(GeneratedPassword::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        let result = ctx.set_contents(joined.clone());
        joined.zeroize();
        result.map_err(|e| anyhow::anyhow!("clipboard error: {e}"))?;

        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        self.report.copied(passwords.len());
        Ok(())
    }
}
