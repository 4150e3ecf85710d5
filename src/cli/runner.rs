//! CLI command execution

use super::commands::{Cli, Commands, OutputFormat, ResourceAction};
use crate::auth::EnvToken;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::resources::{clients, invoices, jobs};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Environment variable holding the bearer token, looked up per request
pub const TOKEN_ENV: &str = "API_ACCESS_TOKEN";

/// Executes parsed CLI commands against the remote API
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected command
    pub async fn run(&self) -> Result<()> {
        let config = ApiConfig::from_env()?;
        info!("Using API endpoint {}", config.base_url());

        let gateway = Gateway::new(config, Arc::new(EnvToken::new(TOKEN_ENV)));

        match &self.cli.command {
            Commands::Clients { action } => self.run_clients(&gateway, action).await,
            Commands::Jobs { action } => self.run_jobs(&gateway, action).await,
            Commands::Invoices { action } => self.run_invoices(&gateway, action).await,
        }
    }

    async fn run_clients(&self, gateway: &Gateway, action: &ResourceAction) -> Result<()> {
        match action {
            ResourceAction::List => {
                let records = clients::list(gateway).await?;
                self.print_records(&records)
            }
            ResourceAction::Create { data } => {
                let client = serde_json::from_str(data)?;
                clients::create(gateway, &client).await?;
                info!("Client created");
                Ok(())
            }
            ResourceAction::Update { id, data } => {
                let client = serde_json::from_str(data)?;
                clients::update(gateway, id, &client).await?;
                info!("Client {id} updated");
                Ok(())
            }
            ResourceAction::Delete { id } => {
                clients::delete(gateway, id).await?;
                info!("Client {id} deleted");
                Ok(())
            }
        }
    }

    async fn run_jobs(&self, gateway: &Gateway, action: &ResourceAction) -> Result<()> {
        match action {
            ResourceAction::List => {
                let records = jobs::list(gateway).await?;
                self.print_records(&records)
            }
            ResourceAction::Create { data } => {
                let job = serde_json::from_str(data)?;
                jobs::create(gateway, &job).await?;
                info!("Job created");
                Ok(())
            }
            ResourceAction::Update { id, data } => {
                let job = serde_json::from_str(data)?;
                jobs::update(gateway, id, &job).await?;
                info!("Job {id} updated");
                Ok(())
            }
            ResourceAction::Delete { id } => {
                jobs::delete(gateway, id).await?;
                info!("Job {id} deleted");
                Ok(())
            }
        }
    }

    async fn run_invoices(&self, gateway: &Gateway, action: &ResourceAction) -> Result<()> {
        match action {
            ResourceAction::List => {
                let records = invoices::list(gateway).await?;
                self.print_records(&records)
            }
            ResourceAction::Create { data } => {
                let invoice = serde_json::from_str(data)?;
                invoices::create(gateway, &invoice).await?;
                info!("Invoice created");
                Ok(())
            }
            ResourceAction::Update { id, data } => {
                let invoice = serde_json::from_str(data)?;
                invoices::update(gateway, id, &invoice).await?;
                info!("Invoice {id} updated");
                Ok(())
            }
            ResourceAction::Delete { id } => {
                invoices::delete(gateway, id).await?;
                info!("Invoice {id} deleted");
                Ok(())
            }
        }
    }

    fn print_records<T: Serialize>(&self, records: &[T]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                for record in records {
                    println!("{}", serde_json::to_string(record)?);
                }
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(records)?);
            }
        }
        Ok(())
    }
}
