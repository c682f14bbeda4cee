//! List command
//!
//! Usage: saloon list

use super::{emit, CliService};

pub fn execute(service: &CliService) -> Result<(), Box<dyn std::error::Error>> {
    emit(service.list_saloons())
}
