//! Errors reported by a generator run.

use std::fmt;
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use crate::config::ConfigError;
use crate::discovery::DiscoveryError;
use crate::input::ParseError;
use crate::locale::LocaleError;
use crate::module::ModuleError;
use crate::output::InvalidSource;
use crate::render::RenderError;

/// Failure categories of the generator, independent of which file or stage raised them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidLocaleTag,
    ModuleResolution,
    MalformedResourceFile,
    TemplateExpansion,
    GeneratedCodeInvalid,
    Io,
    GlobPattern,
    Config,
    /// Two resource files would be written to the same output file.
    DuplicateOutput,
    /// Some files failed while running with `keepGoing`.
    Incomplete,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidLocaleTag => "invalid locale tag",
            Self::ModuleResolution => "module resolution",
            Self::MalformedResourceFile => "malformed resource file",
            Self::TemplateExpansion => "template expansion",
            Self::GeneratedCodeInvalid => "generated code invalid",
            Self::Io => "I/O",
            Self::GlobPattern => "glob pattern",
            Self::Config => "configuration",
            Self::DuplicateOutput => "duplicate output",
            Self::Incomplete => "incomplete run",
        };
        f.write_str(name)
    }
}

/// Failure of the pipeline for one resource file.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("{}: {source}", path.display())]
    InvalidLocaleTag {
        path: PathBuf,
        #[source]
        source: LocaleError,
    },

    #[error("{}: malformed resource file: {source}", path.display())]
    MalformedResourceFile {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{}: {source}", path.display())]
    TemplateExpansion {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    /// The template and the model disagree; this is a bug in the generator, not in the input.
    #[error("{}: {source}", path.display())]
    GeneratedCodeInvalid {
        path: PathBuf,
        #[source]
        source: InvalidSource,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLocaleTag { .. } => ErrorKind::InvalidLocaleTag,
            Self::MalformedResourceFile { .. } => ErrorKind::MalformedResourceFile,
            Self::TemplateExpansion { .. } => ErrorKind::TemplateExpansion,
            Self::GeneratedCodeInvalid { .. } => ErrorKind::GeneratedCodeInvalid,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// The resource file the pipeline was processing.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::InvalidLocaleTag { path, .. }
            | Self::MalformedResourceFile { path, .. }
            | Self::TemplateExpansion { path, .. }
            | Self::GeneratedCodeInvalid { path, .. }
            | Self::Io { path, .. } => path.as_path(),
        }
    }
}

/// Failure of a whole run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    GlobPattern(#[from] DiscoveryError),

    #[error("Failed to resolve the crate name: {0}")]
    ModuleResolution(#[from] ModuleError),

    #[error(transparent)]
    Template(#[from] RenderError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(
        "'{}' and '{}' would both be written to {output}",
        first.display(),
        second.display()
    )]
    DuplicateOutput { output: String, first: PathBuf, second: PathBuf },

    #[error("{failed} of {total} resource files failed")]
    Incomplete { failed: usize, total: usize },

    #[error("Generator task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl RunError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::GlobPattern(_) => ErrorKind::GlobPattern,
            Self::ModuleResolution(_) => ErrorKind::ModuleResolution,
            Self::Template(_) => ErrorKind::TemplateExpansion,
            Self::Generate(err) => err.kind(),
            Self::DuplicateOutput { .. } => ErrorKind::DuplicateOutput,
            Self::Incomplete { .. } => ErrorKind::Incomplete,
            Self::Task(_) => ErrorKind::Io,
        }
    }
}
