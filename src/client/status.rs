// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The `message` box: a transient success/error banner.

use crate::models::StatusMessage;

/// State of the status message box.
///
/// `show` makes a message visible; `hide` hides whatever is showing. Hiding
/// keeps the last text around (as the markup does) but it is no longer
/// visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBox {
    message: Option<StatusMessage>,
    visible: bool,
    shown: u64,
}

impl MessageBox {
    pub fn show(&mut self, message: StatusMessage) {
        self.message = Some(message);
        self.visible = true;
        self.shown += 1;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The message currently on screen, if any.
    pub fn visible_message(&self) -> Option<&StatusMessage> {
        self.message.as_ref().filter(|_| self.visible)
    }

    /// Number of messages shown so far.
    pub fn shown_count(&self) -> u64 {
        self.shown
    }
}
