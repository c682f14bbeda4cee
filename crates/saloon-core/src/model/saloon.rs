use serde::{Deserialize, Serialize};

use super::principal::Principal;
use super::service::ServiceRendered;

/// Rating every saloon starts with
pub const INITIAL_RATING: f64 = 1.0;

/// Inclusive bounds for a single submitted rating
pub const MIN_RATE: f64 = 0.0;
pub const MAX_RATE: f64 = 5.0;

const RATING_DIVISOR: f64 = 5.0;

/// Blend a submitted rating into the current one
///
/// This is a single-step blend, not a running mean: the result depends only
/// on the current value and the new input, never on how many ratings came
/// before.
pub fn blend_rating(current: f64, rate: f64) -> f64 {
    (current + rate) / RATING_DIVISOR
}

/// Saloon - the business-listing aggregate root
///
/// A Saloon owns its list of services. Every mutation produces a full
/// replacement value that is written back under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Saloon {
    /// Unique identifier, immutable after creation
    pub id: String,

    /// Identity of the creator; every owner-only write is checked against it
    pub owner: Principal,

    pub saloon_name: String,

    pub saloon_location: String,

    #[serde(rename = "attachmentURL")]
    pub attachment_url: String,

    /// Services in append order
    pub services_rendered: Vec<ServiceRendered>,

    pub rating: f64,

    /// Timestamp when this Saloon was created
    pub created_at: u64,

    /// Timestamp of the latest mutation, absent until the first one
    pub updated_at: Option<u64>,
}

impl Saloon {
    /// Create a new Saloon with the initial rating and no services
    pub fn new(
        id: String,
        owner: Principal,
        saloon_name: String,
        saloon_location: String,
        attachment_url: String,
        created_at: u64,
    ) -> Self {
        Self {
            id,
            owner,
            saloon_name,
            saloon_location,
            attachment_url,
            services_rendered: Vec::new(),
            rating: INITIAL_RATING,
            created_at,
            updated_at: None,
        }
    }

    pub fn is_owned_by(&self, caller: &Principal) -> bool {
        &self.owner == caller
    }

    /// Append a service after all existing ones
    pub fn push_service(&mut self, service: ServiceRendered) {
        self.services_rendered.push(service);
    }

    /// Blend `rate` into the current rating
    pub fn apply_rating(&mut self, rate: f64) {
        self.rating = blend_rating(self.rating, rate);
    }

    /// Record a mutation at `now`
    pub fn touch(&mut self, now: u64) {
        self.updated_at = Some(now);
    }

    pub fn has_services(&self) -> bool {
        !self.services_rendered.is_empty()
    }
}
