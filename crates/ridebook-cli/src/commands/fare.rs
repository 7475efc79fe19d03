//! `ridebook fare` - price a ride without starting a session.

use tracing::debug;

use ridebook_core::domain::Distance;

use crate::{
    cli::FareArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: FareArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let line = quote(&args, &config)?;
    output.result(&line)?;
    Ok(())
}

fn quote(args: &FareArgs, config: &AppConfig) -> CliResult<String> {
    let distance = Distance::parse(&args.distance).map_err(|e| CliError::InvalidInput {
        message: format!("invalid distance '{}'", args.distance),
        source: Some(Box::new(e)),
    })?;

    let prefix = args
        .currency
        .as_deref()
        .unwrap_or(&config.fare.currency_prefix);
    let fare = distance.fare();
    debug!(km = distance.km(), amount = fare.amount(), "Fare calculated");

    Ok(format!("Ride fare: {}", fare.display_with(prefix)))
}
