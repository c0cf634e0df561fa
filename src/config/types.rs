use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "filePattern")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One numbered line per error.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorSettings {
    /// Glob selecting the resource files, relative to the working directory.
    pub file_pattern: String,

    /// Directory generated files are written to, relative to the working directory.
    pub output_dir: PathBuf,

    /// Files processed at once.
    ///
    /// - `None`: one at a time (default)
    /// - `Some(0)`: 80% of CPU cores (minimum 1)
    /// - `Some(n)`: `n` files at once
    pub jobs: Option<usize>,

    /// Keep processing the remaining files after a failure instead of stopping.
    pub keep_going: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            file_pattern: "*.arb".to_string(),
            output_dir: PathBuf::from("."),
            jobs: None,
            keep_going: false,
        }
    }
}

/// Values given on the command line, applied on top of the loaded settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub file_pattern: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub jobs: Option<usize>,
    pub keep_going: bool,
}

impl GeneratorSettings {
    /// Checks the fields that have no meaning when empty.
    ///
    /// The file pattern is compiled when the run starts, so a malformed glob is reported as
    /// a glob pattern error rather than here.
    ///
    /// # Errors
    /// - Required field is empty
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "filePattern",
                "The pattern cannot be empty. Example: \"*.arb\"",
            ));
        }

        if self.output_dir.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "outputDir",
                "The directory cannot be empty. Use \".\" for the working directory",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(file_pattern) = overrides.file_pattern {
            self.file_pattern = file_pattern;
        }
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = output_dir;
        }
        if overrides.jobs.is_some() {
            self.jobs = overrides.jobs;
        }
        self.keep_going |= overrides.keep_going;
        self
    }

    /// Number of files to process at once.
    #[must_use]
    pub fn effective_jobs(&self) -> usize {
        match self.jobs {
            None => 1,
            Some(0) => (num_cpus::get() * 4 / 5).max(1),
            Some(n) => n,
        }
    }
}
