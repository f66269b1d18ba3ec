//! HTTP server holding the current lock request for a polling lock bridge.
//!
//! Exposes an admin page for setting the request, plain-text routes the
//! bridge reads, and a route where the bridge reports the lock state back. This crate contains the configuration, the shared status
//! store, error handling, and route definitions.

pub mod config;
pub mod device;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
pub mod store;
