// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Directory: browse extracurricular activities and sign up for them
//!
//! This crate provides the directory client (page model, rendering, signup
//! and unregister actions against the activities API) and an in-memory
//! activities server implementing that API.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::RosterStore;

/// Shared server state.
pub struct AppState {
    pub config: Config,
    pub roster: RosterStore,
}
