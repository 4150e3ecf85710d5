//! Authenticated request gateway
//!
//! Every server-side data operation flows through [`Gateway::send`]: it
//! resolves the bearer credential, normalizes the target URL against the
//! configured base endpoint, executes exactly one HTTP call, and folds the
//! response into a parsed JSON value, an explicit no-content outcome, or a
//! typed error. Callers never touch raw responses.

mod client;

pub use client::{Gateway, RequestOptions};
