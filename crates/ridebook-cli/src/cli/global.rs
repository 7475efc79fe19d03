//! Flags accepted before or after any subcommand.

use clap::{Args, ValueHint};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more to stderr; the menu on stdout is unaffected.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output on stderr (-v, -vv, -vvv)",
        long_help = "Log more to stderr:
    (none)  - warnings, e.g. a ride update that had to be rolled back
    -v      - registrations, removals, session start and end
    -vv     - every menu choice and rejected entry
    -vvv    - everything"
    )]
    pub verbose: u8,

    /// Only errors are logged. Fares and config values are still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Log errors only and skip status lines"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes; honours `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file. Must exist when given.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "RIDEBOOK_CONFIG",
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        help = "Configuration file (default: platform config dir)"
    )]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn config_flag_after_subcommand() {
        let cli = Cli::parse_from(["ridebook", "fare", "1", "--config", "rb.toml"]);
        assert_eq!(cli.global.config.as_deref(), Some(Path::new("rb.toml")));
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["ridebook", "-vvv", "run"]);
        assert_eq!(cli.global.verbose, 3);
        assert!(!cli.global.quiet);
    }
}
