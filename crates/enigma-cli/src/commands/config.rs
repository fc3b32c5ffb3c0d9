//! `enigma config`: Inspect the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = lookup(&config, &key)?;
            println!("{key} = {value}");
        }
        ConfigCommands::List => {
            let toml = config.to_toml().map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise configuration: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.header("Effective configuration")?;
            print!("{toml}");
        }
        ConfigCommands::Path => {
            println!("{}", AppConfig::config_path().display());
        }
    }
    Ok(())
}

/// Render a single dotted key.
fn lookup(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = match key {
        "output.no_color" => config.output.no_color.to_string(),
        "output.format" => config.output.format.clone(),
        "json.indent" => config.json.indent.to_string(),
        "doctor.include_optional" => config.doctor.include_optional.to_string(),
        other => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key '{other}'"),
                source: None,
            });
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_render() {
        let config = AppConfig::default();
        assert_eq!(lookup(&config, "json.indent").unwrap(), "2");
        assert_eq!(lookup(&config, "output.format").unwrap(), "auto");
        assert_eq!(lookup(&config, "output.no_color").unwrap(), "false");
        assert_eq!(lookup(&config, "doctor.include_optional").unwrap(), "false");
    }

    #[test]
    fn unknown_key_is_config_error() {
        let err = lookup(&AppConfig::default(), "json.width").unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("json.width"));
    }
}
