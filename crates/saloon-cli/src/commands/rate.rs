//! Rate command
//!
//! Usage: saloon rate <ID> <RATE>

use clap::Args;

use super::{emit, CliService};

#[derive(Debug, Args)]
pub struct RateArgs {
    /// Saloon id
    pub id: String,

    /// Rating between 0 and 5
    #[arg(allow_negative_numbers = true)]
    pub rate: f64,
}

pub fn execute(args: RateArgs, service: &mut CliService) -> Result<(), Box<dyn std::error::Error>> {
    emit(service.rate_saloon(&args.id, args.rate))
}
