//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The mapping depends on what the screen
//! is currently asking of the reviewer.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use crate::api::Classification;
use crate::session::DisplayMode;

/// What the keyboard is currently driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Ordinary review shortcuts.
    Review,
    /// Keys are typed into the comment.
    EditingComment,
    /// The server asked for a confirmation; only `y` and `n` answer it.
    Confirming,
    /// An alert is on screen and must be dismissed first.
    Alert,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.key == KeyCode::Char('c') {
        return Some(AppMsg::Quit);
    }

    match context {
        InputContext::EditingComment => map_comment_key(key.key),
        InputContext::Confirming => map_confirmation_key(key.key),
        InputContext::Alert => map_alert_key(key.key),
        InputContext::Review => map_review_key(key.key),
    }
}

const fn map_comment_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Enter | KeyCode::Esc => Some(AppMsg::FinishComment),
        KeyCode::Backspace => Some(AppMsg::CommentBackspace),
        KeyCode::Char(character) => Some(AppMsg::CommentInput(character)),
        _ => None,
    }
}

const fn map_confirmation_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('y' | 'Y') => Some(AppMsg::Confirm(true)),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(AppMsg::Confirm(false)),
        _ => None,
    }
}

const fn map_alert_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(AppMsg::DismissAlert),
        _ => None,
    }
}

fn map_review_key(key: KeyCode) -> Option<AppMsg> {
    let KeyCode::Char(character) = key else {
        return None;
    };

    if let Some(classification) = Classification::from_shortcut(character) {
        return Some(AppMsg::Classify(classification));
    }
    if let Some(mode) = DisplayMode::from_position(character) {
        return Some(AppMsg::SelectMode(mode));
    }
    match character {
        'q' => Some(AppMsg::Quit),
        'e' => Some(AppMsg::StartComment),
        'm' => Some(AppMsg::CycleMode),
        'r' => Some(AppMsg::Refresh),
        'n' => Some(AppMsg::NextEdit),
        'o' => Some(AppMsg::OpenViewer),
        'd' => Some(AppMsg::OpenDetails),
        '?' => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
