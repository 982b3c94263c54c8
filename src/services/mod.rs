// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API access and roster storage.

pub mod directory_api;
pub mod roster;

pub use directory_api::{ActivityApi, HttpActivityApi};
pub use roster::RosterStore;
