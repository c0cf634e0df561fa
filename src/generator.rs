//! Per-file generation pipeline.

use std::fs::File;
use std::io::BufReader;
use std::path::{
    Path,
    PathBuf,
};

use crate::error::GenerateError;
use crate::input::{
    ParseError,
    parse_arb,
};
use crate::locale::locale_from_path;
use crate::model::TranslationModel;
use crate::module::ModuleName;
use crate::output;
use crate::render::{
    RenderError,
    Renderer,
};

/// Turns resource files into generated Rust files.
///
/// Everything shared between files (crate name, compiled template, output directory) is
/// fixed at construction, so [`Generator::generate`] only depends on its input file and can
/// run for several files at once.
#[derive(Debug)]
pub struct Generator {
    /// Crate stamped into every generated file.
    module_name: ModuleName,
    /// Compiled template.
    renderer: Renderer,
    /// Directory generated files are written to.
    output_dir: PathBuf,
}

impl Generator {
    pub fn new(module_name: ModuleName, output_dir: PathBuf) -> Result<Self, RenderError> {
        Ok(Self { module_name, renderer: Renderer::new()?, output_dir })
    }

    /// Builds a generator around a template other than the bundled one.
    #[cfg(test)]
    pub(crate) fn with_template(
        module_name: ModuleName,
        output_dir: PathBuf,
        template: &str,
    ) -> Result<Self, RenderError> {
        Ok(Self { module_name, renderer: Renderer::with_template(template)?, output_dir })
    }

    /// Generates the source file for `resource_path` and returns the path written.
    pub fn generate(&self, resource_path: &Path) -> Result<PathBuf, GenerateError> {
        let path = resource_path.to_path_buf();

        let locale = locale_from_path(resource_path)
            .map_err(|source| GenerateError::InvalidLocaleTag { path: path.clone(), source })?;
        tracing::debug!(file = %resource_path.display(), %locale, "Generating translations");

        let file = File::open(resource_path)
            .map_err(|source| GenerateError::Io { path: path.clone(), source })?;
        let translations = parse_arb(BufReader::new(file)).map_err(|err| match err {
            ParseError::Io(source) => GenerateError::Io { path: path.clone(), source },
            source => GenerateError::MalformedResourceFile { path: path.clone(), source },
        })?;

        let model = TranslationModel::new(self.module_name.clone(), locale, translations);
        tracing::debug!(
            file = %resource_path.display(),
            pairs = model.pairs().len(),
            "Parsed resource file"
        );

        let raw = self
            .renderer
            .render(&model)
            .map_err(|source| GenerateError::TemplateExpansion { path: path.clone(), source })?;
        let formatted = output::format_source(&raw)
            .map_err(|source| GenerateError::GeneratedCodeInvalid { path: path.clone(), source })?;

        output::write_output(&self.output_dir, model.locale(), &formatted)
            .map_err(|source| GenerateError::Io { path, source })
    }
}
