//! Create command
//!
//! Usage: saloon create --name <NAME> --location <LOCATION> --attachment-url <URL>

use clap::Args;
use saloon_core::SaloonPayload;

use super::{emit, CliService};

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub location: String,

    /// Image or document URL shown with the listing
    #[arg(long)]
    pub attachment_url: String,
}

pub fn execute(
    args: CreateArgs,
    service: &mut CliService,
) -> Result<(), Box<dyn std::error::Error>> {
    emit(service.create_saloon(SaloonPayload::new(
        args.name,
        args.location,
        args.attachment_url,
    )))
}
