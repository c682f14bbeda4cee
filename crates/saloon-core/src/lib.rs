//! Saloon Core - in-memory semantic kernel for the saloon registry
//!
//! This crate provides the foundational data structures and operations:
//! - Saloon and ServiceRendered models with owner-based write authorization
//! - The `RecordStore` contract plus an ordered in-memory `Store`
//! - The `Environment` capability (clock, caller identity, id generation)
//! - Pure operations over a store, and the `apply()` command boundary
//! - The structured error and logging facilities

pub mod apply;
pub mod commands;
pub mod env;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

// Re-export commonly used types
pub use apply::{apply, CommandResult};
pub use commands::Command;
pub use env::{Environment, SystemEnvironment};
pub use errors::{ExError, ExErrorKind, Result, SaloonError};
pub use model::{Principal, Saloon, SaloonPayload, SaloonUpdate, ServicePayload, ServiceRendered};
pub use ops::{RecordStore, Store};

// Logging macros expand to paths under this re-export
pub use saloon_core_types;
