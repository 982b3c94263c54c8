// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models shared by the client and the reference server.

pub mod activity;
pub mod message;

pub use activity::{Activity, ActivityCollection, ActivityDetails};
pub use message::{ActionResponse, ErrorDetail, MessageKind, StatusMessage};
