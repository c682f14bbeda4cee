use serde::{Deserialize, Serialize};

/// A service offered by a saloon, embedded in the saloon's record
///
/// ServiceRendered values have no identity outside their parent: the id is
/// only unique within the owning saloon's `services_rendered` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRendered {
    pub id: String,

    pub service_name: String,

    pub service_description: String,

    /// Price of the service; any value is accepted
    pub service_amount: f64,

    /// Timestamp when the service was appended
    pub created_at: u64,
}

impl ServiceRendered {
    pub fn new(
        id: String,
        service_name: String,
        service_description: String,
        service_amount: f64,
        created_at: u64,
    ) -> Self {
        Self {
            id,
            service_name,
            service_description,
            service_amount,
            created_at,
        }
    }
}
