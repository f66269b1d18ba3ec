//! Core types for the lockrelay status service.
//!
//! The service stores a single lock request, a [`StatusLabel`], which a lock
//! bridge polls and acts on. The bridge answers with a [`DeviceReport`]
//! describing the lock it drives. This crate holds the label table and the
//! parsing rules shared by the HTTP server and the command-line client.

pub mod error;
pub mod report;
pub mod status;

pub use error::CoreError;
pub use report::DeviceReport;
pub use status::StatusLabel;
