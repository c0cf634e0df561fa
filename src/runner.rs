//! Orchestration of a full generator run.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{
    Component,
    Path,
    PathBuf,
};
use std::sync::Arc;
use std::sync::atomic::{
    AtomicBool,
    Ordering,
};

use futures::StreamExt;

use crate::config::GeneratorSettings;
use crate::discovery::find_resource_files;
use crate::error::RunError;
use crate::generator::Generator;
use crate::module::resolve_module_name;
use crate::output::OUTPUT_SUFFIX;

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Generated files, in the order their resource files were discovered.
    pub generated: Vec<PathBuf>,
}

/// Generates one source file per resource file matched in `working_dir`.
///
/// The crate name is resolved once and shared by every file. Files are processed on the
/// blocking pool, `settings.effective_jobs()` at a time, and results are handled in
/// discovery order. Unless `keep_going` is set the first failure ends the run: no new file
/// is started and the files already in progress are awaited before the error is returned.
pub async fn run(settings: &GeneratorSettings, working_dir: &Path) -> Result<RunSummary, RunError> {
    let files = find_resource_files(working_dir, &settings.file_pattern)?;
    if files.is_empty() {
        tracing::warn!(pattern = %settings.file_pattern, "No resource files matched");
        return Ok(RunSummary::default());
    }
    check_distinct_outputs(&files)?;

    let module_name = resolve_module_name(working_dir)?;
    tracing::debug!(%module_name, files = files.len(), "Resolved crate name");

    let output_dir = resolve_output_dir(working_dir, &settings.output_dir);
    let generator = Arc::new(Generator::new(module_name, output_dir)?);
    let total = files.len();

    let stopped = AtomicBool::new(false);
    let mut results = futures::stream::iter(files)
        .map(|path| {
            let task = (!stopped.load(Ordering::Relaxed)).then(|| {
                let generator = Arc::clone(&generator);
                tokio::task::spawn_blocking(move || generator.generate(&path))
            });
            async move {
                match task {
                    Some(handle) => Some(handle.await),
                    None => None,
                }
            }
        })
        .buffered(settings.effective_jobs());

    let mut summary = RunSummary::default();
    let mut failed = 0;
    let mut first_error = None;
    while let Some(outcome) = results.next().await {
        let Some(joined) = outcome else {
            continue;
        };
        match joined? {
            Ok(output) => {
                tracing::info!(output = %output.display(), "Generated");
                summary.generated.push(output);
            }
            Err(err) if settings.keep_going => {
                tracing::error!("{err}");
                failed += 1;
            }
            Err(err) if first_error.is_some() => {
                tracing::debug!("{err}");
            }
            Err(err) => {
                stopped.store(true, Ordering::Relaxed);
                first_error = Some(err);
            }
        }
    }

    if let Some(err) = first_error {
        return Err(err.into());
    }
    if failed > 0 {
        return Err(RunError::Incomplete { failed, total });
    }

    Ok(summary)
}

/// Fails when two resource files would be written to the same output file.
///
/// Output names only depend on the file stem, so files with the same name in different
/// directories collide.
fn check_distinct_outputs(files: &[PathBuf]) -> Result<(), RunError> {
    let mut seen: HashMap<&OsStr, &PathBuf> = HashMap::new();
    for file in files {
        let Some(stem) = file.file_stem() else {
            continue;
        };
        if let Some(first) = seen.insert(stem, file) {
            return Err(RunError::DuplicateOutput {
                output: format!("{}{OUTPUT_SUFFIX}", stem.to_string_lossy()),
                first: first.clone(),
                second: file.clone(),
            });
        }
    }
    Ok(())
}

/// `output_dir` relative to `working_dir`, without `.` components.
fn resolve_output_dir(working_dir: &Path, output_dir: &Path) -> PathBuf {
    output_dir
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .fold(working_dir.to_path_buf(), |dir, component| dir.join(component))
}
