//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod fare;
pub mod init;
pub mod run;
