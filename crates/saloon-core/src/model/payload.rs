//! Caller-supplied payloads
//!
//! Missing text fields deserialize to empty strings so that validation can
//! report them uniformly as missing.

use serde::{Deserialize, Serialize};

/// Fields required to create a saloon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaloonPayload {
    pub saloon_name: String,
    pub saloon_location: String,
    #[serde(rename = "attachmentURL")]
    pub attachment_url: String,
}

impl SaloonPayload {
    pub fn new(
        saloon_name: impl Into<String>,
        saloon_location: impl Into<String>,
        attachment_url: impl Into<String>,
    ) -> Self {
        Self {
            saloon_name: saloon_name.into(),
            saloon_location: saloon_location.into(),
            attachment_url: attachment_url.into(),
        }
    }

    /// True when every required field has non-blank content
    pub fn is_complete(&self) -> bool {
        [&self.saloon_name, &self.saloon_location, &self.attachment_url]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Partial update of a saloon's text fields
///
/// `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaloonUpdate {
    pub saloon_name: Option<String>,
    pub saloon_location: Option<String>,
    #[serde(rename = "attachmentURL")]
    pub attachment_url: Option<String>,
}

impl From<SaloonPayload> for SaloonUpdate {
    fn from(payload: SaloonPayload) -> Self {
        Self {
            saloon_name: Some(payload.saloon_name),
            saloon_location: Some(payload.saloon_location),
            attachment_url: Some(payload.attachment_url),
        }
    }
}

/// Fields of a service to append to a saloon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicePayload {
    pub service_name: String,
    pub service_description: String,
    pub service_amount: f64,
}

impl ServicePayload {
    pub fn new(
        service_name: impl Into<String>,
        service_description: impl Into<String>,
        service_amount: f64,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            service_description: service_description.into(),
            service_amount,
        }
    }
}
