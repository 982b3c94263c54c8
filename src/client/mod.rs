// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity directory client.
//!
//! Every successful mutation is followed by a full reload of the activity
//! list; nothing is updated optimistically. Each completed action shows a
//! status message that a timer hides again after `message_timeout`. Those
//! timers are never cancelled, so an older timer may hide a newer message,
//! and overlapping loads may finish out of order.

pub mod command;
pub mod events;
pub mod page;
pub mod render;
pub mod status;

use crate::error::ClientError;
use crate::models::StatusMessage;
use crate::services::ActivityApi;
use page::Page;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use validator::ValidateEmail;

pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";
pub const GENERIC_REJECTION: &str = "An error occurred";

/// Reasons the signup form refuses to submit (the browser's native checks).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormRejection {
    #[error("Please fill in the email field")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please select an activity")]
    MissingActivity,
}

/// Client state: the API it talks to and the page it renders into.
#[derive(Clone)]
pub struct DirectoryClient {
    api: Arc<dyn ActivityApi>,
    page: Arc<Mutex<Page>>,
    message_timeout: Duration,
}

impl DirectoryClient {
    pub fn new(api: Arc<dyn ActivityApi>, message_timeout: Duration) -> Self {
        Self {
            api,
            page: Arc::new(Mutex::new(Page::new())),
            message_timeout,
        }
    }

    /// Copy of the current page.
    pub async fn snapshot(&self) -> Page {
        self.page.lock().await.clone()
    }

    /// Fetch the full collection and re-render both views.
    ///
    /// On failure the detail list shows a static notice and the selection
    /// control is left as it was. No retry.
    pub async fn load_activities(&self) {
        match self.api.list_activities().await {
            Ok(activities) => {
                tracing::debug!(count = activities.len(), "Activities loaded");
                let mut page = self.page.lock().await;
                render::render_activities(&mut page, &activities);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load activities");
                let mut page = self.page.lock().await;
                render::render_load_failure(&mut page);
            }
        }
    }

    /// Type into the signup form: set the email field and, if given, pick an
    /// activity. Returns false when the activity is not among the options;
    /// the select then falls back to the placeholder, so a later submit
    /// cannot go to a previously picked activity.
    pub async fn fill_form(&self, email: &str, activity: Option<&str>) -> bool {
        let mut page = self.page.lock().await;
        page.signup_form.email = email.to_string();
        let Some(activity) = activity else {
            return true;
        };
        if page.activity_select.select(activity) {
            return true;
        }
        page.activity_select.reset();
        false
    }

    /// Submit the signup form as currently filled in.
    ///
    /// Runs the native form checks first; a rejected form sends nothing.
    pub async fn submit_signup(&self) -> Result<(), FormRejection> {
        let (activity, email) = {
            let page = self.page.lock().await;
            let email = page.signup_form.email.trim().to_string();
            if email.is_empty() {
                return Err(FormRejection::MissingEmail);
            }
            if !email.validate_email() {
                return Err(FormRejection::InvalidEmail);
            }
            let activity = page
                .activity_select
                .selected()
                .ok_or(FormRejection::MissingActivity)?
                .to_string();
            (activity, email)
        };

        self.signup(&activity, &email).await;
        Ok(())
    }

    /// Register `email` for `activity`.
    ///
    /// Success resets the form, shows the server's message and reloads.
    /// Failure shows an error and leaves the form as typed.
    pub async fn signup(&self, activity: &str, email: &str) {
        match self.api.signup(activity, email).await {
            Ok(response) => {
                tracing::info!(activity = %activity, "Signup succeeded");
                self.page.lock().await.reset_form();
                self.show_message(StatusMessage::success(response.message))
                    .await;
                self.load_activities().await;
            }
            Err(e) => {
                tracing::warn!(activity = %activity, error = %e, "Signup failed");
                self.show_message(StatusMessage::error(failure_text(&e, SIGNUP_FAILED)))
                    .await;
            }
        }
    }

    /// Remove `email` from `activity` (a participant row's control).
    pub async fn unregister(&self, activity: &str, email: &str) {
        match self.api.unregister(activity, email).await {
            Ok(response) => {
                tracing::info!(activity = %activity, "Unregister succeeded");
                self.show_message(StatusMessage::success(response.message))
                    .await;
                self.load_activities().await;
            }
            Err(e) => {
                tracing::warn!(activity = %activity, error = %e, "Unregister failed");
                self.show_message(StatusMessage::error(failure_text(
                    &e,
                    UNREGISTER_FAILED,
                )))
                .await;
            }
        }
    }

    /// Show a message and start its hide timer.
    async fn show_message(&self, message: StatusMessage) {
        self.page.lock().await.message.show(message);

        let page = self.page.clone();
        let timeout = self.message_timeout;
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            page.lock().await.message.hide();
        });
    }
}

/// User-facing text for a failed action.
///
/// Rejections show the server's detail (or a generic fallback); transport
/// and parse failures show the action's generic failure text.
fn failure_text(error: &ClientError, transport_fallback: &str) -> String {
    match error {
        ClientError::Rejected { detail, .. } => detail
            .clone()
            .unwrap_or_else(|| GENERIC_REJECTION.to_string()),
        ClientError::Transport(_) | ClientError::Parse(_) => transport_fallback.to_string(),
    }
}
