//! Configuration file loading.

use std::path::Path;

use super::{
    ConfigError,
    GeneratorSettings,
};

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".arb-i18n.json";

/// Loads settings from the working directory.
///
/// Looks for [`CONFIG_FILE_NAME`] in `working_dir`.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and was parsed
/// - `Ok(None)`: there is no configuration file
/// - `Err(ConfigError)`: the file could not be read or parsed
pub(super) fn load_from_dir(working_dir: &Path) -> Result<Option<GeneratorSettings>, ConfigError> {
    let config_path = working_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    load_from_file(&config_path).map(Some)
}

/// Loads settings from an explicitly named file, which must exist.
pub(super) fn load_from_file(config_path: &Path) -> Result<GeneratorSettings, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)
        .map_err(|source| ConfigError::IoError { path: config_path.to_path_buf(), source })?;
    serde_json::from_str(&content)
        .map_err(|source| ConfigError::ParseError { path: config_path.to_path_buf(), source })
}
