pub mod payload;
pub mod principal;
pub mod saloon;
pub mod service;

pub use payload::{SaloonPayload, SaloonUpdate, ServicePayload};
pub use principal::Principal;
pub use saloon::{blend_rating, Saloon, INITIAL_RATING, MAX_RATE, MIN_RATE};
pub use service::ServiceRendered;
