//! Tracing subscriber initialisation.
//!
//! Only the CLI crate installs a subscriber; `ridebook-core` and
//! `ridebook-adapters` only emit events.
//!
//! | Flag(s)  | Level |
//! |----------|-------|
//! | (none)   | WARN  |
//! | `-v`     | INFO  |
//! | `-vv`    | DEBUG |
//! | `-vvv`   | TRACE |
//! | `--quiet`| ERROR |
//!
//! `RUST_LOG` overrides the flags.  Stdout carries the menu protocol, so
//! the writer is fixed to stderr and cannot be configured.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt::MakeWriter, layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the level derived from the flags.
const LOG_TARGETS: [&str; 3] = ["ridebook", "ridebook_core", "ridebook_adapters"];

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    let writer = std::io::stderr;
    let use_ansi = !args.no_color && writer.make_writer().is_terminal();

    // Spans carry the session fields (`strict`), so keep them on the line.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_ansi(use_ansi)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// One `target=level` directive per workspace crate; everything else off.
fn filter_directives(level: LevelFilter) -> String {
    let mut directives = vec![LevelFilter::OFF.to_string()];
    directives.extend(LOG_TARGETS.iter().map(|target| format!("{target}={level}")));
    directives.join(",")
}

/// Map `-v` count and `--quiet` to a level. Quiet wins.
fn derive_level(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
        }
    }

    #[test]
    fn level_steps_with_verbosity() {
        assert_eq!(derive_level(&args_with(0, false)), LevelFilter::WARN);
        assert_eq!(derive_level(&args_with(1, false)), LevelFilter::INFO);
        assert_eq!(derive_level(&args_with(2, false)), LevelFilter::DEBUG);
        assert_eq!(derive_level(&args_with(10, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn directives_cover_every_workspace_crate() {
        let directives = filter_directives(LevelFilter::DEBUG).to_lowercase();
        assert!(directives.starts_with("off,"));
        for target in LOG_TARGETS {
            assert!(directives.contains(&format!("{target}=debug")), "{directives}");
        }
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
