//! `ridebook run` - the interactive menu on stdin/stdout.

use std::io;

use tracing::info;

use crate::{
    cli::RunArgs,
    config::AppConfig,
    error::CliResult,
    session::{Console, Session, SessionSettings},
};

pub fn execute(args: RunArgs, config: AppConfig) -> CliResult<()> {
    let settings = settings_for(args, config);
    info!(
        strict = settings.strict_validation,
        currency = %settings.currency_prefix,
        "Starting interactive session"
    );

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let end = Session::new(console, settings).run()?;
    info!(?end, "Interactive session finished");
    Ok(())
}

/// Flags win over configuration. `--strict` can only turn validation on.
fn settings_for(args: RunArgs, config: AppConfig) -> SessionSettings {
    SessionSettings {
        strict_validation: args.strict || config.rides.strict_validation,
        currency_prefix: args.currency.unwrap_or(config.fare.currency_prefix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_config() {
        let s = settings_for(RunArgs::default(), AppConfig::default());
        assert!(!s.strict_validation);
        assert_eq!(s.currency_prefix, "R$");
    }

    #[test]
    fn flags_override_config() {
        let args = RunArgs {
            strict: true,
            currency: Some("US$".into()),
        };
        let s = settings_for(args, AppConfig::default());
        assert!(s.strict_validation);
        assert_eq!(s.currency_prefix, "US$");
    }

    #[test]
    fn config_can_enable_strict_mode() {
        let mut cfg = AppConfig::default();
        cfg.rides.strict_validation = true;
        assert!(settings_for(RunArgs::default(), cfg).strict_validation);
    }
}
