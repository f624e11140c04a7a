//! Prompt-driven review session.
//!
//! Each line of input is one command. Classification commands ask for an
//! optional comment first and answer any confirmation request through the
//! same input.

use std::io::{BufRead, Write};

use crate::api::{Classification, ReviewError};
use crate::session::{
    ClassifyOutcome, ConfirmationPrompt, DisplayMode, RenderedEdit, ReviewController,
};

const HELP: &str = "\
Commands:
  v  classify as vandalism      c  classify as constructive
  s  skip                       n  load next edit
  m  cycle display mode         1-3  select display mode
  r  refresh viewer URL         o  open viewer in browser
  d  open details page          h  show this help
  q  quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    /// Classify the displayed edit with this label.
    Classify(Classification),
    /// Advance to the next display mode.
    CycleMode,
    /// Select a display mode directly.
    SelectMode(DisplayMode),
    /// Re-render the displayed edit.
    Refresh,
    /// Fetch the next pending edit.
    Next,
    /// Open the viewer URL in the browser.
    OpenViewer,
    /// Open the details page in the browser.
    Details,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

impl LineCommand {
    /// Parses a command line. Returns `None` for blank or unknown input.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut chars = line.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        if let Some(classification) = Classification::from_shortcut(key) {
            return Some(Self::Classify(classification));
        }
        if let Some(mode) = DisplayMode::from_position(key) {
            return Some(Self::SelectMode(mode));
        }
        match key.to_ascii_lowercase() {
            'm' => Some(Self::CycleMode),
            'r' => Some(Self::Refresh),
            'n' => Some(Self::Next),
            'o' => Some(Self::OpenViewer),
            'd' => Some(Self::Details),
            'h' | '?' => Some(Self::Help),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Runs a review session over a line-oriented reader and writer.
#[derive(Debug)]
pub struct LineSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineSession<R, W> {
    /// Creates a session reading commands from `input`.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the session and returns the writer.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Loads the first edit and processes commands until `q` or end of
    /// input.
    ///
    /// Server failures are reported as alerts and do not end the session.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Io`] when the terminal cannot be read or
    /// written.
    pub async fn run(&mut self, controller: &mut ReviewController) -> Result<(), ReviewError> {
        self.write_line(HELP)?;
        match controller.start().await {
            Ok(rendered) => self.show(&rendered, controller.state().display_mode())?,
            Err(error) => self.report(&error)?,
        }

        loop {
            self.write("> ")?;
            let Some(line) = self.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            let Some(command) = LineCommand::parse(&line) else {
                self.write_line(&format!("Unknown command '{}'. Type h for help.", line.trim()))?;
                continue;
            };
            if command == LineCommand::Quit {
                break;
            }
            self.dispatch(controller, command).await?;
        }

        tracing::info!("review session ended");
        Ok(())
    }

    async fn dispatch(
        &mut self,
        controller: &mut ReviewController,
        command: LineCommand,
    ) -> Result<(), ReviewError> {
        match command {
            LineCommand::Classify(classification) => {
                self.classify(controller, classification).await
            }
            LineCommand::CycleMode => {
                let mode = controller.state().display_mode().next();
                self.change_mode(controller, mode)
            }
            LineCommand::SelectMode(mode) => self.change_mode(controller, mode),
            LineCommand::Refresh => match controller.refresh() {
                Some(rendered) => self.show(&rendered, controller.state().display_mode()),
                None => self.report(&ReviewError::NoEditDisplayed),
            },
            LineCommand::Next => match controller.load_next().await {
                Ok(rendered) => self.show(&rendered, controller.state().display_mode()),
                Err(error) => self.report(&error),
            },
            LineCommand::OpenViewer => match controller.open_viewer() {
                Ok(url) => self.write_line(&format!("Opened {url}")),
                Err(error) => self.report(&error),
            },
            LineCommand::Details => match controller.open_details() {
                Ok(url) => self.write_line(&format!("Opened {url}")),
                Err(error) => self.report(&error),
            },
            LineCommand::Help => self.write_line(HELP),
            LineCommand::Quit => Ok(()),
        }
    }

    async fn classify(
        &mut self,
        controller: &mut ReviewController,
        classification: Classification,
    ) -> Result<(), ReviewError> {
        let Some(edit_id) = controller.state().current_edit() else {
            return self.report(&ReviewError::NoEditDisplayed);
        };

        self.write("Comment (optional): ")?;
        let comment = self.read_line()?.unwrap_or_default();
        controller.set_comment(strip_line_ending(&comment));

        match controller
            .classify_with_prompt(classification.clone(), &mut *self)
            .await
        {
            Ok(ClassifyOutcome::Advanced(rendered)) => {
                self.write_line(&format!("Classified edit {edit_id} as {classification}."))?;
                self.show(&rendered, controller.state().display_mode())
            }
            Ok(ClassifyOutcome::ConfirmationRequired { .. }) => {
                self.write_line("Classification is awaiting confirmation.")
            }
            Err(ReviewError::ConfirmationDeclined { edit_id: declined }) => {
                self.write_line(&format!("Edit {declined} left unclassified."))
            }
            Err(error) => self.report(&error),
        }
    }

    fn change_mode(
        &mut self,
        controller: &mut ReviewController,
        mode: DisplayMode,
    ) -> Result<(), ReviewError> {
        controller.set_display_mode(mode);
        match controller.refresh() {
            Some(rendered) => self.show(&rendered, mode),
            None => self.write_line(&format!("Display mode: {mode}")),
        }
    }

    fn show(&mut self, rendered: &RenderedEdit, mode: DisplayMode) -> Result<(), ReviewError> {
        self.write_line(&format!(
            "Edit {} [{mode}]\n  {}",
            rendered.edit_id, rendered.viewer_url
        ))
    }

    fn report(&mut self, error: &ReviewError) -> Result<(), ReviewError> {
        match error.alert_message() {
            Some(message) => self.write_line(&format!("Alert: {message}")),
            None => Ok(()),
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, ReviewError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_error)?;
        Ok((read > 0).then_some(line))
    }

    fn write(&mut self, text: &str) -> Result<(), ReviewError> {
        self.output.write_all(text.as_bytes()).map_err(io_error)?;
        self.output.flush().map_err(io_error)
    }

    fn write_line(&mut self, text: &str) -> Result<(), ReviewError> {
        writeln!(self.output, "{text}").map_err(io_error)
    }
}

impl<R: BufRead, W: Write> ConfirmationPrompt for LineSession<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool, ReviewError> {
        self.write(&format!("{question} [y/N] "))?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

/// Removes the trailing `\n` or `\r\n` and nothing else.
fn strip_line_ending(line: &str) -> &str {
    let without_newline = line.strip_suffix('\n').unwrap_or(line);
    without_newline
        .strip_suffix('\r')
        .unwrap_or(without_newline)
}

fn io_error(error: std::io::Error) -> ReviewError {
    ReviewError::Io {
        message: error.to_string(),
    }
}
