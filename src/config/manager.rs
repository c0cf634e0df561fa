//! Settings resolution for one generator run.

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    GeneratorSettings,
    SettingsOverrides,
    loader,
};

/// Holds the settings of the current run.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Current settings
    current_settings: GeneratorSettings,

    /// Configuration file the settings came from, if any
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: GeneratorSettings::default(), config_path: None }
    }

    /// Loads settings for a run in `working_dir`.
    ///
    /// Settings are layered as defaults, then the configuration file (`explicit_path`, or
    /// the default file in `working_dir` when present), then `overrides`.
    ///
    /// # Errors
    /// - The explicit configuration file does not exist or cannot be read
    /// - JSON parse error
    /// - Validation error
    pub fn load_settings(
        &mut self,
        working_dir: &Path,
        explicit_path: Option<&Path>,
        overrides: SettingsOverrides,
    ) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for working directory: {:?}", working_dir);

        let (settings, config_path) = if let Some(path) = explicit_path {
            let path = working_dir.join(path);
            (loader::load_from_file(&path)?, Some(path))
        } else {
            match loader::load_from_dir(working_dir)? {
                Some(settings) => (settings, Some(working_dir.join(super::CONFIG_FILE_NAME))),
                None => (GeneratorSettings::default(), None),
            }
        };

        self.update_settings(settings.with_overrides(overrides))?;
        self.config_path = config_path;

        Ok(())
    }

    /// Replaces the current settings after validating them.
    pub fn update_settings(&mut self, new_settings: GeneratorSettings) -> Result<(), ConfigError> {
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &GeneratorSettings {
        &self.current_settings
    }

    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
