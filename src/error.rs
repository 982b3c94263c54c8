// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the activities server and the directory client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorDetail;

/// Server-side error that converts to a `{"detail": ...}` response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::Unprocessable(msg) => {
                msg
            }
        };

        (status, Json(ErrorDetail { detail })).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure of a call to the activities API, as seen by the client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, reset, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response arrived but its body was not what the endpoint promises.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Non-success status; `detail` is the server-supplied text when present.
    #[error("Rejected with HTTP {status}: {}", .detail.as_deref().unwrap_or("<no detail>"))]
    Rejected { status: u16, detail: Option<String> },
}

impl ClientError {
    /// Server-supplied rejection text, if this is a rejection that carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Parse(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}
