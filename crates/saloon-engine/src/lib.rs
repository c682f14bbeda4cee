//! Saloon Engine - Service boundary
//!
//! Wraps a `RecordStore` and an `Environment` behind `SaloonService`, which
//! owns lifecycle logging and converts domain errors into `ExError`.
//! `Response` renders any outcome as a tagged, serializable value.

pub mod response;
pub mod service;

pub use response::{ErrorBody, Response};
pub use service::SaloonService;
