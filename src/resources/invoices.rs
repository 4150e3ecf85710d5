//! Invoices resource

use crate::error::Result;
use crate::gateway::Gateway;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Invoice lifecycle state. The wire format is the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl From<InvoiceStatus> for u8 {
    fn from(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Draft => 0,
            InvoiceStatus::Sent => 1,
            InvoiceStatus::Paid => 2,
            InvoiceStatus::Overdue => 3,
            InvoiceStatus::Cancelled => 4,
        }
    }
}

impl TryFrom<u8> for InvoiceStatus {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(InvoiceStatus::Draft),
            1 => Ok(InvoiceStatus::Sent),
            2 => Ok(InvoiceStatus::Paid),
            3 => Ok(InvoiceStatus::Overdue),
            4 => Ok(InvoiceStatus::Cancelled),
            other => Err(format!("unknown invoice status: {other}")),
        }
    }
}

/// An invoice record, matching the remote API's InvoiceDto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    pub status: InvoiceStatus,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub amount: f64,
}

/// Fetch all invoices. A no-content response yields an empty list.
pub async fn list(gateway: &Gateway) -> Result<Vec<Invoice>> {
    match gateway.get("Invoices").await? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(Vec::new()),
    }
}

/// Create an invoice
pub async fn create(gateway: &Gateway, invoice: &Invoice) -> Result<()> {
    gateway
        .post("Invoices", serde_json::to_value(invoice)?)
        .await?;
    Ok(())
}

/// Update an invoice by id
pub async fn update(gateway: &Gateway, id: &str, invoice: &Invoice) -> Result<()> {
    gateway
        .put(&format!("Invoices/{id}"), serde_json::to_value(invoice)?)
        .await?;
    Ok(())
}

/// Delete an invoice by id
pub async fn delete(gateway: &Gateway, id: &str) -> Result<()> {
    gateway.delete(&format!("Invoices/{id}")).await?;
    Ok(())
}
