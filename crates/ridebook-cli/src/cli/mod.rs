//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ridebook",
    bin_name = "ridebook",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Interactive ride book: drivers, riders, rides and fares",
    long_about = "Ridebook keeps drivers, riders and rides in memory for the \
                  length of one interactive session and prices rides by distance.",
    after_help = "EXAMPLES:\n\
        \x20 ridebook                 # start the interactive menu\n\
        \x20 ridebook run --strict    # reject rides with empty fields\n\
        \x20 ridebook fare 12.5\n\
        \x20 ridebook completions bash > /usr/share/bash-completion/completions/ridebook",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Defaults to `run`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive menu.
    #[command(
        about = "Start the interactive menu (default)",
        after_help = "EXAMPLES:\n\
            \x20 ridebook run\n\
            \x20 ridebook run --strict --currency US$"
    )]
    Run(RunArgs),

    /// Price a ride and exit.
    #[command(
        about = "Calculate the fare for a distance",
        after_help = "EXAMPLES:\n\
            \x20 ridebook fare 10      # R$ 25.00\n\
            \x20 ridebook fare 3.2 --currency EUR"
    )]
    Fare(FareArgs),

    /// Initialise a Ridebook configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 ridebook init                       # default location\n\
            \x20 ridebook --config ./rb.toml init    # explicit path\n\
            \x20 ridebook init --force               # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ridebook completions bash > ~/.local/share/bash-completion/completions/ridebook\n\
            \x20 ridebook completions zsh  > ~/.zfunc/_ridebook\n\
            \x20 ridebook completions fish > ~/.config/fish/completions/ridebook.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Ridebook configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ridebook config get fare.currency_prefix\n\
            \x20 ridebook config list\n\
            \x20 ridebook config path"
    )]
    Config(ConfigCommands),
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `ridebook run`.
#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Reject rides whose origin, destination, rider or driver is empty.
    #[arg(long = "strict", help = "Require non-empty ride fields")]
    pub strict: bool,

    /// Currency prefix for fares, overriding the configuration.
    #[arg(long = "currency", value_name = "PREFIX", help = "Currency prefix for fares")]
    pub currency: Option<String>,
}

// ── fare ──────────────────────────────────────────────────────────────────────

/// Arguments for `ridebook fare`.
#[derive(Debug, Args)]
pub struct FareArgs {
    /// Distance in kilometres.  Kept as text so invalid input gets the same
    /// message as in the interactive menu.
    #[arg(value_name = "DISTANCE_KM", allow_hyphen_values = true, help = "Distance in km")]
    pub distance: String,

    /// Currency prefix for the fare, overriding the configuration.
    #[arg(long = "currency", value_name = "PREFIX", help = "Currency prefix")]
    pub currency: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `ridebook init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ridebook completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `ridebook config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `fare.currency_prefix`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
