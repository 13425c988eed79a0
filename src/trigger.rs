//! Thin client for the trigger.dev task-queue API.
//! Covers the two operations the CLI exposes: listing recent runs filtered
//! by status, and firing the document-updater task.

use std::env;

use clap::ValueEnum;
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Task fired by `trigger execute`.
pub const DOCUMENT_UPDATER_TASK: &str = "document-updater";

/// Production API endpoint; override with `TRIGGER_API_URL`.
pub const DEFAULT_API_URL: &str = "https://api.trigger.dev";

/// Number of runs requested per listing.
pub const DEFAULT_RUN_LIMIT: usize = 10;

/// Lifecycle states a trigger.dev run can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerRunStatus {
    WaitingForDeploy,
    Queued,
    Executing,
    Reattempting,
    Frozen,
    Completed,
    Canceled,
    Failed,
    Crashed,
    Interrupted,
    SystemFailure,
}

impl TriggerRunStatus {
    /// The API's wire name for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerRunStatus::WaitingForDeploy => "WAITING_FOR_DEPLOY",
            TriggerRunStatus::Queued => "QUEUED",
            TriggerRunStatus::Executing => "EXECUTING",
            TriggerRunStatus::Reattempting => "REATTEMPTING",
            TriggerRunStatus::Frozen => "FROZEN",
            TriggerRunStatus::Completed => "COMPLETED",
            TriggerRunStatus::Canceled => "CANCELED",
            TriggerRunStatus::Failed => "FAILED",
            TriggerRunStatus::Crashed => "CRASHED",
            TriggerRunStatus::Interrupted => "INTERRUPTED",
            TriggerRunStatus::SystemFailure => "SYSTEM_FAILURE",
        }
    }
}

impl std::fmt::Display for TriggerRunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A run record as returned by the runs listing endpoint (subset of fields).
#[derive(Debug, Deserialize)]
pub struct RunSummary {
    pub id: String,
    pub status: TriggerRunStatus,
    #[serde(rename = "taskIdentifier")]
    pub task_identifier: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct RunList {
    pub data: Vec<RunSummary>,
}

/// Handle returned when a task is triggered.
#[derive(Debug, Deserialize)]
pub struct TriggerHandle {
    pub id: String,
}

/// Blocking client for the trigger.dev REST API.
pub struct TriggerClient {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl TriggerClient {
    pub fn new(secret_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self { client: Client::new(), base_url: base_url.into(), secret_key: secret_key.into() }
    }

    /// Builds a client from the environment.
    ///
    /// # Errors
    /// * `Error::Config` if `TRIGGER_SECRET_KEY` is not set; it is the one
    ///   setting without a default
    pub fn from_env() -> Result<Self> {
        let secret_key = env::var("TRIGGER_SECRET_KEY")
            .map_err(|_| Error::Config("TRIGGER_SECRET_KEY is not set".to_string()))?;
        let base_url = env::var("TRIGGER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self::new(secret_key, base_url))
    }

    /// Lists the most recent runs with the given status.
    pub fn list_runs(&self, status: TriggerRunStatus, limit: usize) -> Result<Vec<RunSummary>> {
        let url = format!("{}/api/v3/runs", self.base_url);
        debug!("GET {} (status={}, limit={})", url, status, limit);

        let limit = limit.to_string();
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.secret_key)
            .query(&[("filter[status]", status.as_str()), ("page[size]", limit.as_str())])
            .send()?;

        let status_code = response.status();
        if !status_code.is_success() {
            return Err(Error::TriggerApi {
                status: status_code.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let list: RunList = response.json()?;
        Ok(list.data)
    }

    /// Fires a task with an empty payload and returns its run handle.
    pub fn trigger_task(&self, task: &str) -> Result<TriggerHandle> {
        let url = format!("{}/api/v1/tasks/{}/trigger", self.base_url, task);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .json(&serde_json::json!({ "payload": {} }))
            .send()?;

        let status_code = response.status();
        if !status_code.is_success() {
            return Err(Error::TriggerApi {
                status: status_code.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        Ok(response.json()?)
    }
}
