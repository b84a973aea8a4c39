//! Error types raised while extracting and compiling catalogs.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Only produced in strict mode.
    #[error("`{program}` exited with {}", describe_code(.code))]
    ToolFailed { program: String, code: Option<i32> },

    #[error("source root {} does not exist", .path.display())]
    MissingRoot { path: PathBuf },
}

impl TranslateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

pub type Result<T, E = TranslateError> = std::result::Result<T, E>;
