use crate::cli::ConfigAction;
use crate::config::{AppConfig, CONFIG_KEYS, ConfigError};
use crate::console::console;

pub fn handle_config(action: ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = AppConfig::load()?;
            for line in render_config(&config) {
                console().plain(&line);
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = AppConfig::load()?;

            match config.update_setting(&key, value) {
                Ok(()) => {
                    config.save()?;
                    console().success("Configuration updated successfully");
                }
                Err(ConfigError::UnknownConfigKey { key }) => {
                    console().error(&format!(
                        "Unknown config key: {}. Valid keys: {}",
                        key,
                        CONFIG_KEYS.join(", ")
                    ));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
    Ok(())
}

/// `key = value` lines in file order. Unset optional keys are omitted.
pub fn render_config(config: &AppConfig) -> Vec<String> {
    let mut lines = vec![
        format!("backend = \"{}\"", config.backend),
        format!("base_url = \"{}\"", config.base_url),
        format!("debounce_ms = {}", config.debounce_ms),
        format!("blur_delay_ms = {}", config.blur_delay_ms),
        format!("limit = {}", config.limit),
    ];
    if let Some(ref category) = config.category {
        lines.push(format!("category = \"{}\"", category));
    }
    lines.push(format!(
        "request_timeout_secs = {}",
        config.request_timeout_secs
    ));
    if let Some(ref verbosity) = config.verbosity {
        lines.push(format!("verbosity = \"{}\"", verbosity));
    }
    if let Some(ref log_file) = config.log_file {
        lines.push(format!("log_file = \"{}\"", log_file.display()));
    }
    lines
}
