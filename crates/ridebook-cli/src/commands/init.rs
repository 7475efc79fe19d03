//! `ridebook init` - create a default configuration file.

use std::path::Path;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// What `write_default_config` did.
#[derive(Debug, PartialEq, Eq)]
enum InitOutcome {
    Created,
    AlreadyExists,
}

/// Write the default configuration to `--config FILE` or the platform path.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = AppConfig::active_path(global.config.as_ref());

    match write_default_config(&config_path, args.force)? {
        InitOutcome::AlreadyExists => output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?,
        InitOutcome::Created => output.success(&format!(
            "Configuration created at {}",
            config_path.display(),
        ))?,
    }

    Ok(())
}

fn write_default_config(path: &Path, force: bool) -> CliResult<InitOutcome> {
    if path.exists() && !force {
        return Ok(InitOutcome::AlreadyExists);
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    Ok(InitOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn creates_missing_file_and_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert_eq!(write_default_config(&path, false).unwrap(), InitOutcome::Created);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("currency_prefix = \"R$\""));
        assert!(written.contains("strict_validation = false"));
    }

    #[test]
    fn keeps_existing_file_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "# mine\n").unwrap();

        assert_eq!(
            write_default_config(&path, false).unwrap(),
            InitOutcome::AlreadyExists
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
    }

    #[test]
    fn force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "# mine\n").unwrap();

        assert_eq!(write_default_config(&path, true).unwrap(), InitOutcome::Created);
        let back = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(back, AppConfig::default());
    }
}
