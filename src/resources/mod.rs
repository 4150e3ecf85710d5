//! Resource data-access functions
//!
//! Thin pass-throughs over the gateway for each remote resource type.
//! All URL, credential, and response normalization lives in the gateway;
//! these modules only name endpoints and shape payloads.

pub mod clients;
pub mod invoices;
pub mod jobs;

pub use clients::Client;
pub use invoices::{Invoice, InvoiceStatus};
pub use jobs::{Job, JobStatus};
