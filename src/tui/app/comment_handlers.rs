//! Comment draft editing for the review TUI.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::tui::messages::AppMsg;

impl ReviewApp {
    /// Dispatches comment editing messages to their handlers.
    pub(super) fn handle_comment_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::StartComment => {
                self.editing_comment = true;
                self.notice = None;
            }
            AppMsg::CommentInput(character) => self.comment_draft.push(*character),
            AppMsg::CommentBackspace => {
                self.comment_draft.pop();
            }
            AppMsg::FinishComment => self.editing_comment = false,
            _ => {
                debug_assert!(false, "non-comment message routed to handle_comment_msg");
            }
        }
        None
    }
}
