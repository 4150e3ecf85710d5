//! Clients resource

use crate::error::Result;
use crate::gateway::Gateway;
use serde::{Deserialize, Serialize};

/// A client record, matching the remote API's DTO.
///
/// `id` is assigned by the server; leave it `None` when creating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Fetch all clients. A no-content response yields an empty list.
pub async fn list(gateway: &Gateway) -> Result<Vec<Client>> {
    match gateway.get("Clients").await? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(Vec::new()),
    }
}

/// Create a client
pub async fn create(gateway: &Gateway, client: &Client) -> Result<()> {
    gateway.post("Clients", serde_json::to_value(client)?).await?;
    Ok(())
}

/// Update a client by id
pub async fn update(gateway: &Gateway, id: &str, client: &Client) -> Result<()> {
    gateway
        .put(&format!("Clients/{id}"), serde_json::to_value(client)?)
        .await?;
    Ok(())
}

/// Delete a client by id
pub async fn delete(gateway: &Gateway, id: &str) -> Result<()> {
    gateway.delete(&format!("Clients/{id}")).await?;
    Ok(())
}
