//! Result Presenter
//!
//! Renders validation outcomes: a single affirmative line for a valid
//! document, one located line per violation otherwise, or a plain error
//! message when a call failed. Each render replaces the previous output.

use std::io::Write;

use crate::report::{ValidationOutcome, resolve_path};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

pub struct Presenter<W> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    /// Render a validation outcome, replacing prior output.
    pub fn show_outcome(&mut self, outcome: &ValidationOutcome) {
        if let Err(err) = self.render_outcome(outcome) {
            log::error!("failed to render outcome: {err}");
        }
    }

    /// Render a failure message, replacing prior output.
    pub fn show_error(&mut self, message: &str) {
        if let Err(err) = self.render_error(message) {
            log::error!("failed to render error: {err}");
        }
    }

    fn render_outcome(&mut self, outcome: &ValidationOutcome) -> std::io::Result<()> {
        self.begin()?;

        match outcome {
            ValidationOutcome::Valid => writeln!(self.out, "Valid document!")?,
            ValidationOutcome::Invalid(violations) => {
                for violation in violations {
                    let path = resolve_path(violation);
                    if path.is_empty() {
                        writeln!(self.out, "{}", violation.error)?;
                    } else {
                        writeln!(self.out, "{}: {}", path.join("."), violation.error)?;
                    }
                }
            }
        }

        self.out.flush()
    }

    fn render_error(&mut self, message: &str) -> std::io::Result<()> {
        self.begin()?;
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }

    fn begin(&mut self) -> std::io::Result<()> {
        if self.clear_screen {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }
        Ok(())
    }
}
