//! # jobdesk
//!
//! Rust client for the JobDesk business-management API.
//!
//! Every server-side data operation flows through a single
//! [`Gateway`](gateway::Gateway): it attaches the bearer credential from a
//! pluggable [`TokenProvider`](auth::TokenProvider), normalizes the target
//! URL against the configured base endpoint, and folds each HTTP response
//! into a parsed JSON value, a no-content outcome, or a typed
//! [`Error`](error::Error) with a single human-readable message. The
//! resource modules (clients, jobs, invoices) are thin pass-throughs on
//! top.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jobdesk::auth::StaticToken;
//! use jobdesk::config::ApiConfig;
//! use jobdesk::gateway::Gateway;
//! use jobdesk::resources::clients;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> jobdesk::Result<()> {
//!     let config = ApiConfig::from_env()?;
//!     let gateway = Gateway::new(config, Arc::new(StaticToken::new("token")));
//!
//!     for client in clients::list(&gateway).await? {
//!         println!("{}", client.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Bearer-token sources
pub mod auth;

/// Client configuration
pub mod config;

/// Authenticated request gateway
pub mod gateway;

/// Resource data-access functions
pub mod resources;

/// Command-line interface
pub mod cli;

pub use config::ApiConfig;
pub use error::{Error, Result};
pub use gateway::{Gateway, RequestOptions};
pub use types::{JsonObject, JsonValue, Method};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
