// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! UI events and their dispatch onto client operations.

use super::{DirectoryClient, FormRejection};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Something the user (or the page lifecycle) did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Page finished loading; fetch the list.
    PageLoaded,
    /// User edited the signup form.
    FormInput {
        email: String,
        activity: Option<String>,
    },
    /// `#signup-form` submitted.
    SignupSubmitted,
    /// A participant row's unregister control was clicked.
    UnregisterClicked { activity: String, email: String },
}

/// Runs each event's handler as its own task.
///
/// Handlers are not serialized against each other: a reload started by one
/// action is not cancelled when another action starts a newer one.
#[derive(Clone)]
pub struct Dispatcher {
    client: DirectoryClient,
}

impl Dispatcher {
    pub fn new(client: DirectoryClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &DirectoryClient {
        &self.client
    }

    pub fn dispatch(&self, event: UiEvent) -> JoinHandle<Result<(), FormRejection>> {
        let client = self.client.clone();
        tokio::spawn(async move {
            match event {
                UiEvent::PageLoaded => client.load_activities().await,
                UiEvent::FormInput { email, activity } => {
                    if !client.fill_form(&email, activity.as_deref()).await {
                        tracing::info!(activity = ?activity, "Unknown activity, selection cleared");
                    }
                }
                UiEvent::SignupSubmitted => {
                    if let Err(rejection) = client.submit_signup().await {
                        tracing::info!(reason = %rejection, "Signup form not submitted");
                        return Err(rejection);
                    }
                }
                UiEvent::UnregisterClicked { activity, email } => {
                    client.unregister(&activity, &email).await
                }
            }
            Ok(())
        })
    }
}

/// Event loop: dispatch every event until the sender side is dropped, then
/// wait for the handlers still in flight.
pub async fn run(dispatcher: Dispatcher, mut events: mpsc::UnboundedReceiver<UiEvent>) {
    let mut in_flight: Vec<JoinHandle<Result<(), FormRejection>>> = Vec::new();

    while let Some(event) = events.recv().await {
        tracing::debug!(event = ?event, "Dispatching UI event");
        in_flight.retain(|handle| !handle.is_finished());
        in_flight.push(dispatcher.dispatch(event));
    }

    for handle in in_flight {
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "UI event handler panicked");
        }
    }
}
