//! Resolution of the crate a working directory belongs to.

use std::fmt;
use std::path::{
    Path,
    PathBuf,
};

use serde::Deserialize;
use thiserror::Error;

/// Manifest that marks a package root.
const MANIFEST_FILE: &str = "Cargo.toml";

#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("No Cargo.toml found in '{}' or any parent directory", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("'{}' is a virtual workspace manifest; the directory belongs to no package", .0.display())]
    VirtualManifest(PathBuf),

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Crate name '{name}' from '{}' is not a valid Rust identifier", path.display())]
    InvalidName { name: String, path: PathBuf },
}

/// Name of the crate generated files are compiled into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName(String);

impl ModuleName {
    /// Wraps `name` without validating it.
    #[cfg(test)]
    pub(crate) fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The parts of a cargo manifest that decide the crate name.
#[derive(Debug, Deserialize)]
struct Manifest {
    /// `[package]`, absent in a virtual manifest.
    package: Option<Package>,
    /// `[lib]`
    lib: Option<Lib>,
}

/// `[package]` table.
#[derive(Debug, Deserialize)]
struct Package {
    /// Package name, may contain dashes.
    name: String,
}

/// `[lib]` table.
#[derive(Debug, Deserialize)]
struct Lib {
    /// Library target name, overrides the package name.
    name: Option<String>,
}

/// Resolves the crate name for `dir`.
///
/// Like cargo, the nearest `Cargo.toml` in `dir` or its ancestors decides which package
/// the directory belongs to. The `[lib] name` wins over `package.name`; dashes in the
/// package name become underscores.
pub fn resolve_module_name(dir: &Path) -> Result<ModuleName, ModuleError> {
    let dir = dir
        .canonicalize()
        .map_err(|source| ModuleError::Io { path: dir.to_path_buf(), source })?;

    let manifest_path = dir
        .ancestors()
        .map(|ancestor| ancestor.join(MANIFEST_FILE))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| ModuleError::ManifestNotFound(dir.clone()))?;

    tracing::debug!(manifest = %manifest_path.display(), "Resolving crate name");

    let content = std::fs::read_to_string(&manifest_path)
        .map_err(|source| ModuleError::Io { path: manifest_path.clone(), source })?;
    let manifest: Manifest = toml::from_str(&content)
        .map_err(|source| ModuleError::Parse { path: manifest_path.clone(), source })?;

    let Some(package) = manifest.package else {
        return Err(ModuleError::VirtualManifest(manifest_path));
    };

    let name = manifest
        .lib
        .and_then(|lib| lib.name)
        .unwrap_or_else(|| package.name.replace('-', "_"));

    if syn::parse_str::<syn::Ident>(&name).is_err() {
        return Err(ModuleError::InvalidName { name, path: manifest_path });
    }

    Ok(ModuleName(name))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn write_manifest(dir: &Path, content: &str) {
        fs::write(dir.join(MANIFEST_FILE), content).unwrap();
    }

    #[rstest]
    #[case("[package]\nname = \"app\"\n", "app")]
    #[case("[package]\nname = \"my-app\"\nversion = \"0.1.0\"\n", "my_app")]
    #[case("[package]\nname = \"my-app\"\n\n[lib]\nname = \"core_lib\"\n", "core_lib")]
    #[case("[package]\nname = \"my-app\"\n\n[lib]\npath = \"src/lib.rs\"\n", "my_app")]
    #[case("[package]\nname = \"app\"\n\n[workspace]\nmembers = [\"sub\"]\n", "app")]
    fn resolve_from_manifest(#[case] manifest: &str, #[case] expected: &str) {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), manifest);

        let name = resolve_module_name(temp_dir.path()).unwrap();

        assert_eq!(name.as_str(), expected);
    }

    #[rstest]
    fn resolve_walks_up_to_nearest_manifest() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), "[workspace]\nmembers = [\"app\"]\n");
        let crate_dir = temp_dir.path().join("app");
        let l10n_dir = crate_dir.join("src").join("l10n");
        fs::create_dir_all(&l10n_dir).unwrap();
        write_manifest(&crate_dir, "[package]\nname = \"app\"\n");

        let name = resolve_module_name(&l10n_dir).unwrap();

        assert_eq!(name.as_str(), "app");
    }

    #[rstest]
    fn resolve_virtual_manifest_fails() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), "[workspace]\nmembers = [\"crates/*\"]\n");

        let result = resolve_module_name(temp_dir.path());

        assert!(matches!(result, Err(ModuleError::VirtualManifest(_))));
    }

    #[rstest]
    fn resolve_invalid_manifest_fails() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), "[package\nname = ");

        let result = resolve_module_name(temp_dir.path());

        assert!(matches!(result, Err(ModuleError::Parse { .. })));
    }

    #[rstest]
    fn resolve_keyword_name_fails() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), "[package]\nname = \"type\"\n");

        let result = resolve_module_name(temp_dir.path());

        assert!(matches!(result, Err(ModuleError::InvalidName { .. })));
        assert_that!(result.unwrap_err().to_string(), contains_substring("'type'"));
    }

    #[rstest]
    fn resolve_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();

        let result = resolve_module_name(&temp_dir.path().join("missing"));

        assert!(matches!(result, Err(ModuleError::Io { .. })));
    }
}
