//! Jobs resource

use crate::error::Result;
use crate::gateway::Gateway;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job lifecycle state. The wire format is the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum JobStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    OnHold,
    Cancelled,
}

impl From<JobStatus> for u8 {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::NotStarted => 0,
            JobStatus::InProgress => 1,
            JobStatus::Completed => 2,
            JobStatus::OnHold => 3,
            JobStatus::Cancelled => 4,
        }
    }
}

impl TryFrom<u8> for JobStatus {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(JobStatus::NotStarted),
            1 => Ok(JobStatus::InProgress),
            2 => Ok(JobStatus::Completed),
            3 => Ok(JobStatus::OnHold),
            4 => Ok(JobStatus::Cancelled),
            other => Err(format!("unknown job status: {other}")),
        }
    }
}

/// A job record, matching the remote API's JobDto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub client_id: String,
    pub title: String,
    pub description: String,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub hourly_rate: f64,
    pub hours_worked: f64,
    pub material_cost: f64,
}

/// Fetch all jobs. A no-content response yields an empty list.
pub async fn list(gateway: &Gateway) -> Result<Vec<Job>> {
    match gateway.get("Jobs").await? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(Vec::new()),
    }
}

/// Create a job
pub async fn create(gateway: &Gateway, job: &Job) -> Result<()> {
    gateway.post("Jobs", serde_json::to_value(job)?).await?;
    Ok(())
}

/// Update a job by id
pub async fn update(gateway: &Gateway, id: &str, job: &Job) -> Result<()> {
    gateway
        .put(&format!("Jobs/{id}"), serde_json::to_value(job)?)
        .await?;
    Ok(())
}

/// Delete a job by id
pub async fn delete(gateway: &Gateway, id: &str) -> Result<()> {
    gateway.delete(&format!("Jobs/{id}")).await?;
    Ok(())
}
