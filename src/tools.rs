//! External gettext utilities.
//!
//! Extraction and compilation are delegated to `xgettext` and `msgfmt`. Each
//! call is described by a [`ToolInvocation`] and executed by a [`ToolRunner`],
//! so tests can substitute a runner that never spawns a process.

use std::{
    ffi::OsString,
    fmt,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use tracing::{debug, warn};

use crate::error::{Result, TranslateError};

pub const DEFAULT_XGETTEXT: &str = "xgettext";
pub const DEFAULT_MSGFMT: &str = "msgfmt";

/// A single external command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// `xgettext --language=<lang> -d <domain> -o <output> <sources...> [-j]`
    pub fn xgettext(
        program: &str,
        source_language: &str,
        domain: &str,
        output: &Path,
        sources: &[PathBuf],
        join_existing: bool,
    ) -> Self {
        let invocation = Self::new(program)
            .arg(format!("--language={}", source_language))
            .arg("-d")
            .arg(domain)
            .arg("-o")
            .arg(output)
            .args(sources);

        if join_existing {
            invocation.arg("-j")
        } else {
            invocation
        }
    }

    /// `msgfmt -o <output> <input>`
    pub fn msgfmt(program: &str, output: &Path, input: &Path) -> Self {
        Self::new(program).arg("-o").arg(output).arg(input)
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// What came back from a finished tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolOutcome {
    pub success: bool,
    pub exit_code: Option<i32>,
}

impl ToolOutcome {
    pub const SUCCESS: Self = Self {
        success: true,
        exit_code: Some(0),
    };
}

pub trait ToolRunner: Sync {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutcome>;
}

/// Runs tools as child processes with inherited stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner {
    /// Treat a non-zero exit as an error instead of a warning.
    pub strict: bool,
}

impl SystemRunner {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

impl ToolRunner for SystemRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutcome> {
        debug!(command = %invocation, "running external tool");

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .status()
            .map_err(|source| TranslateError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        let outcome = ToolOutcome {
            success: status.success(),
            exit_code: status.code(),
        };
        check_outcome(&invocation.program, outcome, self.strict)
    }
}

pub(crate) fn check_outcome(
    program: &str,
    outcome: ToolOutcome,
    strict: bool,
) -> Result<ToolOutcome> {
    if outcome.success {
        return Ok(outcome);
    }
    if strict {
        return Err(TranslateError::ToolFailed {
            program: program.to_string(),
            code: outcome.exit_code,
        });
    }
    warn!(program, code = ?outcome.exit_code, "external tool reported failure, continuing");
    Ok(outcome)
}
