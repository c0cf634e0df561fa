//! Resource file discovery from a glob pattern.

use std::path::{
    Component,
    Path,
    PathBuf,
};

use globset::{
    GlobBuilder,
    GlobMatcher,
};
use ignore::WalkBuilder;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// Compiles `pattern` with path-style semantics: `*`, `?` and classes stay within one
/// path component, `**` spans directories.
fn compile_pattern(pattern: &str) -> Result<GlobMatcher, DiscoveryError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| DiscoveryError::InvalidPattern { pattern: pattern.to_string(), source })
}

/// Finds the files under `root` matching `pattern`, sorted by path.
///
/// Relative patterns are matched against paths relative to `root`. The walk starts at the
/// literal directory prefix of the pattern and only goes as deep as the pattern can match
/// unless it contains `**`. Hidden and git-ignored files are not skipped.
pub fn find_resource_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    let matcher = compile_pattern(pattern)?;

    let pattern_path = Path::new(pattern);
    let is_absolute = pattern_path.is_absolute();
    let (base, depth) = walk_plan(pattern_path);
    let walk_root = root.join(&base);

    tracing::debug!(
        pattern,
        walk_root = %walk_root.display(),
        max_depth = ?depth,
        "Searching resource files"
    );

    let mut found_files = Vec::new();
    for result in WalkBuilder::new(&walk_root)
        .standard_filters(false)
        .follow_links(false)
        .max_depth(depth)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let candidate = if is_absolute {
            path
        } else {
            let Ok(relative_path) = path.strip_prefix(root) else {
                continue;
            };
            relative_path
        };
        if matcher.is_match(candidate) {
            found_files.push(path.to_path_buf());
        }
    }

    found_files.sort();
    Ok(found_files)
}

/// Splits a pattern into the literal directory to start walking from and the walk depth
/// needed below it (`None` when the pattern contains `**`).
fn walk_plan(pattern: &Path) -> (PathBuf, Option<usize>) {
    let mut base = PathBuf::new();
    let mut components = pattern.components().peekable();

    while let Some(component) = components.peek() {
        let is_literal_dir = match component {
            Component::Normal(part) => !has_glob_meta(&part.to_string_lossy()),
            _ => true,
        };
        // The last component names the files, never a directory to descend into.
        if !is_literal_dir || pattern.components().count() - base.components().count() <= 1 {
            break;
        }
        base.push(component.as_os_str());
        components.next();
    }

    let rest: Vec<_> = components.collect();
    let recursive = rest.iter().any(|component| component.as_os_str() == "**");
    let depth = if recursive { None } else { Some(rest.len()) };

    (base, depth)
}

/// Whether a path component contains glob syntax.
fn has_glob_meta(part: &str) -> bool {
    part.contains(['*', '?', '[', ']', '{', '}'])
}
