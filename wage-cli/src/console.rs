//! Line-oriented prompt/answer I/O for the interactive menu.
//!
//! [`Console`] is generic over its reader and writer so sessions can be
//! scripted in tests with an in-memory buffer.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::utils::{ParseDecimalError, parse_decimal, parse_optional_decimal};

#[derive(Debug, Error)]
pub enum InputError {
    /// The input stream reached end of file.
    #[error("input closed")]
    Closed,

    #[error("a value is required")]
    Empty,

    #[error(transparent)]
    InvalidNumber(#[from] ParseDecimalError),

    #[error("invalid choice '{0}'")]
    InvalidChoice(String),

    #[error("expected {expected}, got '{input}'")]
    InvalidFormat {
        expected: &'static str,
        input: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl InputError {
    /// Errors that should end the session instead of a single operation.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Closed | Self::Io(_))
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(
        input: R,
        output: W,
    ) -> Self {
        Self { input, output }
    }

    /// Where presenters write.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `message` without a newline and reads one trimmed line.
    pub fn prompt(
        &mut self,
        message: &str,
    ) -> Result<String, InputError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// A required number. Blank input is rejected.
    pub fn prompt_decimal(
        &mut self,
        message: &str,
    ) -> Result<Decimal, InputError> {
        let answer = self.prompt(message)?;
        if answer.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(parse_decimal(&answer)?)
    }

    /// A number that may be left blank to mean "no change".
    pub fn prompt_optional_decimal(
        &mut self,
        message: &str,
    ) -> Result<Option<Decimal>, InputError> {
        let answer = self.prompt(message)?;
        Ok(parse_optional_decimal(&answer)?)
    }

    /// `true` only for an answer starting with `y`.
    pub fn confirm(
        &mut self,
        message: &str,
    ) -> Result<bool, InputError> {
        let answer = self.prompt(message)?;
        Ok(answer.to_ascii_lowercase().starts_with('y'))
    }
}
