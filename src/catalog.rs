//! Catalog layout on disk.
//!
//! Every language gets its own message directory under the project root:
//!
//! ```text
//! <root>/locales/<lang>/LC_MESSAGES/<domain>.po
//! <root>/locales/<lang>/LC_MESSAGES/<domain>.mo
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::error::{Result, TranslateError};

pub const LOCALES_DIR: &str = "locales";
pub const MESSAGES_DIR: &str = "LC_MESSAGES";

/// Placeholder xgettext writes into the header's `Content-Type` line.
pub const CHARSET_PLACEHOLDER: &str = "CHARSET";
pub const CHARSET: &str = "UTF-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLayout {
    root: PathBuf,
    domain: String,
}

impl CatalogLayout {
    pub fn new(root: impl Into<PathBuf>, domain: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            domain: domain.into(),
        }
    }

    pub fn locales_dir(&self) -> PathBuf {
        self.root.join(LOCALES_DIR)
    }

    pub fn language_dir(&self, lang: &str) -> PathBuf {
        self.locales_dir().join(lang)
    }

    pub fn messages_dir(&self, lang: &str) -> PathBuf {
        self.language_dir(lang).join(MESSAGES_DIR)
    }

    /// Path of the textual (`.po`) catalog for `lang`.
    pub fn po_path(&self, lang: &str) -> PathBuf {
        self.messages_dir(lang).join(format!("{}.po", self.domain))
    }

    /// Path of the binary (`.mo`) catalog for `lang`.
    pub fn mo_path(&self, lang: &str) -> PathBuf {
        self.messages_dir(lang).join(format!("{}.mo", self.domain))
    }

    /// Create `locales/`, `locales/<lang>/` and `LC_MESSAGES/` one level at a
    /// time. Levels that already exist are left alone.
    pub fn ensure_messages_dir(&self, lang: &str) -> Result<PathBuf> {
        let levels = [
            ("locales", self.locales_dir()),
            ("language", self.language_dir(lang)),
            ("LC_MESSAGES", self.messages_dir(lang)),
        ];

        for (label, dir) in levels {
            if dir.is_dir() {
                continue;
            }
            info!(lang, path = %dir.display(), "{} dir not found, creating it", label);
            create_dir_once(&dir)?;
        }

        Ok(self.messages_dir(lang))
    }
}

/// Another worker may create the same shared level between the existence
/// check and `create_dir`.
fn create_dir_once(dir: &Path) -> Result<()> {
    match fs::create_dir(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(TranslateError::io(dir, e)),
    }
}

/// Replace every charset placeholder in the catalog at `path` with `UTF-8`,
/// rewriting the file in place.
///
/// Returns the number of replacements made.
pub fn patch_charset(path: &Path) -> Result<usize> {
    let text = fs::read_to_string(path).map_err(|e| TranslateError::io(path, e))?;
    let count = text.matches(CHARSET_PLACEHOLDER).count();
    if count == 0 {
        debug!(path = %path.display(), "no charset placeholder to patch");
        return Ok(0);
    }

    let patched = text.replace(CHARSET_PLACEHOLDER, CHARSET);
    fs::write(path, patched).map_err(|e| TranslateError::io(path, e))?;
    debug!(path = %path.display(), count, "patched charset placeholder");
    Ok(count)
}
