//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::SettingsOverrides;

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Generate Rust translation tables from ARB locale files")]
pub struct Cli {
    /// Glob selecting the resource files, relative to the working directory
    #[arg(short, long = "file", value_name = "GLOB")]
    pub file_pattern: Option<String>,

    /// Directory generated files are written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Files processed at once. 0 picks a value from the number of CPU cores
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Keep processing the remaining files after a failure
    #[arg(long)]
    pub keep_going: bool,

    /// Configuration file to use instead of `.arb-i18n.json`
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Values from the command line that take precedence over the configuration file.
    #[must_use]
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            file_pattern: self.file_pattern.clone(),
            output_dir: self.output_dir.clone(),
            jobs: self.jobs,
            keep_going: self.keep_going,
        }
    }
}
