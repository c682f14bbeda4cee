//! Core types shared across the saloon registry crates
//!
//! Used by both the error facility and the logging facility:
//!
//! - **Correlation types**: RequestId, RequestContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId};
