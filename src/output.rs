//! Validation, formatting and writing of generated source files.

use std::fs;
use std::io::{
    self,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use crate::locale::LocaleTag;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by arb-i18n-codegen. DO NOT EDIT.";

/// Suffix appended to the locale tag to form the output file name.
pub const OUTPUT_SUFFIX: &str = "_i18n.rs";

/// Rendered text that does not parse as a Rust file.
#[derive(Error, Debug)]
#[error("Generated code is not valid Rust at {line}:{column}: {source}")]
pub struct InvalidSource {
    pub line: usize,
    pub column: usize,
    #[source]
    pub source: syn::Error,
}

impl From<syn::Error> for InvalidSource {
    fn from(source: syn::Error) -> Self {
        let start = source.span().start();
        Self { line: start.line, column: start.column + 1, source }
    }
}

/// Checks that `raw` is a well-formed Rust file and returns it in canonical formatting.
pub fn format_source(raw: &str) -> Result<String, InvalidSource> {
    let file = syn::parse_file(raw)?;
    let formatted = prettyplease::unparse(&file);
    Ok(format!("{GENERATED_HEADER}\n\n{formatted}"))
}

/// `<locale>_i18n.rs`
#[must_use]
pub fn output_file_name(locale: &LocaleTag) -> String {
    format!("{locale}{OUTPUT_SUFFIX}")
}

/// Writes `source` to `<output_dir>/<locale>_i18n.rs`, replacing any existing file.
///
/// The text goes to a uniquely named temporary sibling first and is renamed into place, so
/// readers never see a partially written file and concurrent writers never share a
/// temporary file. Missing output directories are created.
pub fn write_output(output_dir: &Path, locale: &LocaleTag, source: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let file_name = output_file_name(locale);
    let path = output_dir.join(&file_name);

    let prefix = format!(".{file_name}.");
    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix).suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    // The temporary file is removed when it is dropped without being persisted.
    let mut tmp = builder.tempfile_in(output_dir)?;
    tmp.write_all(source.as_bytes())?;
    tmp.persist(&path).map_err(|err| err.error)?;

    tracing::debug!(path = %path.display(), bytes = source.len(), "Wrote generated file");
    Ok(path)
}
