use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, TranslateError};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Options controlling which files count as translatable sources.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Extensions without the leading dot, e.g. `py`.
    pub extensions: Vec<String>,
    pub ignores: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["py".to_string()],
            ignores: Vec::new(),
        }
    }
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files in traversal order.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Recursively list source files under `root`.
///
/// Files and directories whose name starts with `.` are skipped, and so is
/// everything below a hidden directory.
pub fn scan_files(root: &Path, options: &ScanOptions) -> Result<ScanResult> {
    if !root.exists() {
        return Err(TranslateError::MissingRoot {
            path: root.to_path_buf(),
        });
    }
    info!(root = %root.display(), "scanning for source files");

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in &options.ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => warn!(pattern = %p, "invalid ignore pattern: {}", e),
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    let mut result = ScanResult::default();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                warn!("cannot access path: {}", e);
                continue;
            }
        };
        let path = entry.path();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if path.is_file() && has_source_extension(path, &options.extensions) {
            result.files.push(path.to_path_buf());
        }
    }

    info!(
        count = result.files.len(),
        skipped = result.skipped_count,
        "found source files"
    );
    Ok(result)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn has_source_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}
