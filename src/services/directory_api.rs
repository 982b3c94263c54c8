// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities API client.
//!
//! Handles:
//! - Fetching the full activity collection
//! - Signup and unregister requests
//! - Mapping non-success responses to their `detail` text

use crate::error::ClientError;
use crate::models::{ActionResponse, ActivityCollection};
use async_trait::async_trait;
use serde::Deserialize;

/// The three calls the directory client makes against the server.
#[async_trait]
pub trait ActivityApi: Send + Sync {
    /// `GET /activities`
    async fn list_activities(&self) -> Result<ActivityCollection, ClientError>;

    /// `POST /activities/{name}/signup?email={email}`
    async fn signup(&self, activity: &str, email: &str) -> Result<ActionResponse, ClientError>;

    /// `DELETE /activities/{name}/unregister?email={email}`
    async fn unregister(&self, activity: &str, email: &str)
        -> Result<ActionResponse, ClientError>;
}

/// reqwest-backed implementation of [`ActivityApi`].
#[derive(Clone)]
pub struct HttpActivityApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpActivityApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// URL for an action on a named activity, with both parts percent-encoded.
    pub fn action_url(&self, activity: &str, action: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base_url,
            urlencoding::encode(activity),
            action,
            urlencoding::encode(email)
        )
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = rejection_detail(&body);
            tracing::debug!(status = %status, detail = ?detail, "Activities API rejected request");
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ClientError::Parse(format!("JSON parse error: {}", e)))
    }
}

/// Extract a string `detail` field from an error body.
///
/// Anything else (non-JSON body, missing field, structured validation detail)
/// yields `None`, and the caller falls back to a generic message.
fn rejection_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl ActivityApi for HttpActivityApi {
    async fn list_activities(&self) -> Result<ActivityCollection, ClientError> {
        let url = format!("{}/activities", self.base_url);
        let response = self.http.get(&url).send().await?;
        self.check_response_json(response).await
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ActionResponse, ClientError> {
        let url = self.action_url(activity, "signup", email);
        let response = self.http.post(&url).send().await?;
        self.check_response_json(response).await
    }

    async fn unregister(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<ActionResponse, ClientError> {
        let url = self.action_url(activity, "unregister", email);
        let response = self.http.delete(&url).send().await?;
        self.check_response_json(response).await
    }
}
