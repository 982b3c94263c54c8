// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_directory::config::Config;
use activity_directory::error::{AppError, ClientError};
use activity_directory::models::{ActionResponse, ActivityCollection};
use activity_directory::routes::create_router;
use activity_directory::services::{ActivityApi, RosterStore};
use activity_directory::AppState;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Create a test app backed by a freshly seeded roster.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        roster: RosterStore::seeded(),
    });

    (create_router(state.clone()), state)
}

/// Serve a test app on an ephemeral local port.
/// Returns the base URL and the shared state.
#[allow(dead_code)]
pub async fn spawn_test_server() -> (String, Arc<AppState>) {
    let (app, state) = create_test_app();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

/// In-process stand-in for the activities API, backed by a real roster.
///
/// `offline` makes every call fail as a transport error. `list_delays`
/// holds per-call delays for upcoming list requests, so tests can make
/// loads complete out of order.
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeApi {
    pub roster: RosterStore,
    pub offline: AtomicBool,
    pub list_delays: Mutex<VecDeque<Duration>>,
    pub list_calls: AtomicUsize,
    pub mutation_calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeApi {
    pub fn seeded() -> Arc<Self> {
        Arc::new(Self {
            roster: RosterStore::seeded(),
            ..Default::default()
        })
    }

    pub fn with_activities(activities: ActivityCollection) -> Arc<Self> {
        Arc::new(Self {
            roster: RosterStore::new(activities),
            ..Default::default()
        })
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn delay_next_list(&self, delay: Duration) {
        self.list_delays.lock().unwrap().push_back(delay);
    }

    fn check_online(&self) -> Result<(), ClientError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ClientError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

fn rejected(err: AppError) -> ClientError {
    ClientError::Rejected {
        status: err.status().as_u16(),
        detail: Some(err.to_string()),
    }
}

#[async_trait]
impl ActivityApi for FakeApi {
    async fn list_activities(&self) -> Result<ActivityCollection, ClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.list_delays.lock().unwrap().pop_front();
        // Snapshot before sleeping, like a response that was sent earlier
        // but arrives late.
        let snapshot = self.roster.list().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.check_online()?;
        Ok(snapshot)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ActionResponse, ClientError> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let message = self.roster.signup(activity, email).await.map_err(rejected)?;
        Ok(ActionResponse { message })
    }

    async fn unregister(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<ActionResponse, ClientError> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let message = self
            .roster
            .unregister(activity, email)
            .await
            .map_err(rejected)?;
        Ok(ActionResponse { message })
    }
}
