//! CLI context - bundles settings, flags, and output handling.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use passgen::error::report;
use passgen::{EntropySource, GenerationRequest, Generator};
use zeroize::Zeroize;

use super::{CliFlags, Prompts, print_help};
use crate::exits::Exit;
use crate::settings::Settings;

/// Application context for one CLI run.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    prompts: Prompts,
}

impl Context {
    /// Parse command-line arguments into a context.
    pub fn new(args: &[String]) -> Result<Self, Exit> {
        let flags = super::parse(args).map_err(|e| Exit::Usage(e.to_string()))?;
        let settings = Settings::from_flags(&flags);
        let prompts = Prompts::new(flags.quiet);

        Ok(Self {
            settings,
            flags,
            prompts,
        })
    }

    pub fn prompts(&self) -> Prompts {
        self.prompts
    }

    /// Run the CLI. `Err(Exit::Done)` marks an early, successful exit.
    pub fn run(&self) -> Result<(), Exit> {
        self.handle_info_flags()?;

        let mut generator = Generator::from_options(&self.settings.options())
            .map_err(|e| Exit::Failed(report(&e)))?;
        log::debug!(
            "generating {} password(s) of length {}",
            self.settings.number_of_passwords,
            self.settings.pass_length
        );

        let request = self.settings.request();
        let count = self.settings.number_of_passwords;

        if self.settings.to_clipboard {
            match ClipboardContext::new() {
                Ok(clipboard) => {
                    return self.write_clipboard(clipboard, &mut generator, &request, count);
                }
                Err(e) => {
                    log::debug!("clipboard unavailable: {e}");
                    if !self.prompts.clipboard_fallback() {
                        return Err(Exit::Done);
                    }
                }
            }
        }

        self.write_terminal(&mut generator, &request, count)
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    fn write_terminal<S: EntropySource>(
        &self,
        generator: &mut Generator<S>,
        request: &GenerationRequest,
        count: usize,
    ) -> Result<(), Exit> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        for _ in 0..count {
            let mut pass = generator
                .generate(request)
                .map_err(|e| Exit::Failed(report(&e)))?;
            pass.push('\n');
            let written = out.write_all(pass.as_bytes());
            pass.zeroize();
            written.map_err(|e| Exit::Failed(format!("Failed to write password: {e}")))?;
        }

        out.flush()
            .map_err(|e| Exit::Failed(format!("Failed to write password: {e}")))
    }

    fn write_clipboard<S: EntropySource>(
        &self,
        mut clipboard: ClipboardContext,
        generator: &mut Generator<S>,
        request: &GenerationRequest,
        count: usize,
    ) -> Result<(), Exit> {
        let mut passwords = String::new();
        for i in 0..count {
            let mut pass = match generator.generate(request) {
                Ok(pass) => pass,
                Err(e) => {
                    passwords.zeroize();
                    return Err(Exit::Failed(report(&e)));
                }
            };
            if i > 0 {
                passwords.push('\n');
            }
            passwords.push_str(&pass);
            pass.zeroize();
        }

        let result = clipboard.set_contents(passwords.clone());
        passwords.zeroize();
        match result {
            Ok(()) => {
                if let Ok(mut retrieved) = clipboard.get_contents() {
                    retrieved.zeroize();
                }
                self.prompts.clipboard_copied(count);
                Ok(())
            }
            Err(e) => {
                self.prompts.clipboard_error(&e.to_string());
                Err(Exit::Failed("clipboard unavailable".to_string()))
            }
        }
    }
}
