use crate::error::{
    ReadInputSnafu, RegistrationError, RegistrationResult, UnreadableInputSnafu, WriteOutputSnafu,
};
use snafu::ResultExt;
use std::{
    error::Error,
    fmt::Display,
    io::{BufRead, Write},
};

const SEPARATOR_WIDTH: usize = 50;

/// Line-based console over any reader/writer pair, so the menu can be driven
/// from stdin or from a buffer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn line(&mut self, text: impl Display) -> RegistrationResult<()> {
        writeln!(self.output, "{text}").context(WriteOutputSnafu)
    }

    pub fn blank(&mut self) -> RegistrationResult<()> {
        writeln!(self.output).context(WriteOutputSnafu)
    }

    /// Asks `question` and reads one line.
    ///
    /// The outer error is a broken console. `None` means the input is
    /// exhausted. The inner error is a line which wasn't valid UTF-8, which
    /// the caller treats like any other bad answer.
    pub fn prompt(
        &mut self,
        question: &str,
    ) -> RegistrationResult<Option<RegistrationResult<String>>> {
        write!(self.output, "{question}").context(WriteOutputSnafu)?;
        self.output.flush().context(WriteOutputSnafu)?;

        let mut answer = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut answer)
            .context(ReadInputSnafu)?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(
            String::from_utf8(answer)
                .map(|answer| answer.trim().to_string())
                .context(UnreadableInputSnafu),
        ))
    }

    pub fn separator(&mut self) -> RegistrationResult<()> {
        self.line("-".repeat(SEPARATOR_WIDTH))
    }

    /// Prints `message`, then the technical details of `error` if there is one.
    pub fn error_message(
        &mut self,
        message: &str,
        error: Option<&RegistrationError>,
    ) -> RegistrationResult<()> {
        self.line(message)?;
        self.blank()?;

        if let Some(error) = error {
            error!(?error, "{message}");

            self.line("-- Technical Error Message --")?;
            self.line(error)?;
            self.line(error.kind())?;

            let mut source = error.source();
            while let Some(cause) = source {
                self.line(format_args!("caused by: {cause}"))?;
                source = cause.source();
            }
            self.blank()?;
        }

        Ok(())
    }

    /// Prints every record framed by separators, or a notice if there are none.
    pub fn records<T: Display>(&mut self, records: &[T]) -> RegistrationResult<()> {
        if records.is_empty() {
            self.line("No registrations to display yet.")?;
            return self.blank();
        }

        self.separator()?;
        for record in records {
            self.line(record)?;
        }
        self.separator()?;
        self.blank()
    }
}
