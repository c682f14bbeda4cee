//! Command types for every registry operation
//!
//! This module defines the command inventory that serves as the entry point
//! for functional-boundary operations via the `apply()` function.

use crate::model::{SaloonPayload, SaloonUpdate, ServicePayload};

/// Command enum representing all registry operations
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// List every stored saloon
    ListSaloons,

    /// Read one saloon
    GetSaloon { saloon_id: String },

    /// Create a saloon owned by the caller
    CreateSaloon { payload: SaloonPayload },

    /// Append a service to a saloon (owner only)
    AddService {
        saloon_id: String,
        payload: ServicePayload,
    },

    /// Delete a saloon (owner only)
    DeleteSaloon { saloon_id: String },

    /// Blend a 0-5 rating into a saloon's rating
    RateSaloon { saloon_id: String, rate: f64 },

    /// Update a saloon's text fields (owner only)
    UpdateSaloon {
        saloon_id: String,
        update: SaloonUpdate,
    },
}

impl Command {
    /// Stable operation name used in logs and errors
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::ListSaloons => "list_saloons",
            Command::GetSaloon { .. } => "get_saloon",
            Command::CreateSaloon { .. } => "create_saloon",
            Command::AddService { .. } => "add_service",
            Command::DeleteSaloon { .. } => "delete_saloon",
            Command::RateSaloon { .. } => "rate_saloon",
            Command::UpdateSaloon { .. } => "update_saloon",
        }
    }

    /// Whether the command can change the store
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Command::ListSaloons | Command::GetSaloon { .. })
    }

    /// Target saloon id, when the command addresses one
    pub fn saloon_id(&self) -> Option<&str> {
        match self {
            Command::ListSaloons | Command::CreateSaloon { .. } => None,
            Command::GetSaloon { saloon_id }
            | Command::AddService { saloon_id, .. }
            | Command::DeleteSaloon { saloon_id }
            | Command::RateSaloon { saloon_id, .. }
            | Command::UpdateSaloon { saloon_id, .. } => Some(saloon_id),
        }
    }
}
