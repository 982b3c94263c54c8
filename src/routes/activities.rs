// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity listing, signup and unregister routes.

use crate::error::{AppError, Result};
use crate::models::{ActionResponse, ActivityCollection};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Activity routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{name}/signup", post(signup))
        .route("/activities/{name}/unregister", delete(unregister))
}

#[derive(Deserialize)]
struct EmailQuery {
    email: Option<String>,
}

impl EmailQuery {
    fn require(self) -> Result<String> {
        self.email
            .filter(|email| !email.is_empty())
            .ok_or_else(|| AppError::Unprocessable("Missing required query parameter: email".into()))
    }
}

/// Full activity listing, keyed by name.
async fn list_activities(State(state): State<Arc<AppState>>) -> Json<ActivityCollection> {
    Json(state.roster.list().await)
}

/// Sign a student up for an activity.
async fn signup(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<ActionResponse>> {
    let email = query.require()?;
    let message = state.roster.signup(&name, &email).await?;
    Ok(Json(ActionResponse { message }))
}

/// Remove a student from an activity.
async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<ActionResponse>> {
    let email = query.require()?;
    let message = state.roster.unregister(&name, &email).await?;
    Ok(Json(ActionResponse { message }))
}
