//! Bearer-token sources
//!
//! The gateway never caches or refreshes credentials itself; it asks a
//! [`TokenProvider`] for the current token on every call and forwards
//! whatever it gets. Token issuance and refresh live with the identity
//! provider, behind whichever `TokenProvider` the application wires in.

mod provider;

pub use provider::{EnvToken, NoToken, StaticToken, TokenProvider};
