//! Rendering logic for the review TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use unicode_width::UnicodeWidthChar;

use super::ReviewApp;
use crate::session::DisplayMode;

const REVIEW_HINTS: &str =
    "v:vandalism  c:constructive  s:skip  e:comment  m:mode  n:next  o:open  d:details  ?:help  q:quit";

impl ReviewApp {
    /// Renders the whole screen.
    pub(super) fn render_main_view(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_mode_bar());
        output.push_str(&self.render_viewer_line());
        output.push_str(&self.render_comment_line());
        output.push('\n');
        output.push_str(&self.render_status_bar());
        output
    }

    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let edit = self
            .session
            .current_edit()
            .map_or_else(|| "no edit loaded".to_owned(), |edit_id| format!("edit {edit_id}"));
        let loading_indicator = if self.loading { " [Loading...]" } else { "" };
        format!("Review session - {edit}{loading_indicator}\n")
    }

    /// Renders the display mode selector, marking the active mode.
    pub(super) fn render_mode_bar(&self) -> String {
        let selected = self.session.display_mode();
        let modes: Vec<String> = DisplayMode::ALL
            .iter()
            .zip(1..)
            .map(|(mode, position)| {
                let marker = if *mode == selected { '*' } else { ' ' };
                format!("[{marker}] {position}:{}", mode.label())
            })
            .collect();
        format!("Mode: {}\n", modes.join("  "))
    }

    fn render_viewer_line(&self) -> String {
        self.session.viewer_url().map_or_else(
            || "Viewer: -\n".to_owned(),
            |url| format!("Viewer: {url}\n"),
        )
    }

    fn render_comment_line(&self) -> String {
        let cursor = if self.editing_comment { "_" } else { "" };
        format!("Comment: {}{cursor}\n", self.comment_draft)
    }

    /// Renders the status bar: alert, confirmation prompt, editing hint,
    /// notice, or key hints, in that order of priority.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(alert) = &self.alert {
            return format!("Alert: {alert}  [Enter to dismiss]\n");
        }

        if let Some(pending) = self.session.pending_confirmation() {
            return format!(
                "Are you sure? Classify edit {} as {}? [y/n]\n",
                pending.edit_id, pending.classification
            );
        }

        if self.editing_comment {
            return "Editing comment: Enter/Esc to finish  Backspace:delete\n".to_owned();
        }

        if let Some(notice) = &self.notice {
            return format!("{notice}\n");
        }

        format!("{REVIEW_HINTS}\n")
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Classification:
  v          Vandalism
  c          Constructive
  s          Skip
  e          Edit comment (Enter/Esc to finish)

Confirmation:
  y          Confirm the classification
  n, Esc     Decline and keep the edit

Viewer:
  m          Cycle display mode
  1, 2, 3    Normal / Diff only / Rendered
  r          Refresh viewer URL
  o          Open viewer in browser
  d          Open details page in browser

Other:
  n          Load next edit
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }

    /// Clips every line to the terminal width and pads to its height.
    pub(super) fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width);
        let height = usize::from(self.height);
        let mut lines: Vec<String> = output
            .lines()
            .take(height)
            .map(|line| clip_to_width(line, width))
            .collect();
        lines.resize(height.max(lines.len()), String::new());
        lines.join("\n")
    }
}

fn clip_to_width(line: &str, width: usize) -> String {
    let mut used = 0;
    let mut clipped = String::new();
    for character in line.chars() {
        let char_width = character.width().unwrap_or(0);
        if used + char_width > width {
            break;
        }
        used += char_width;
        clipped.push(character);
    }
    clipped
}
