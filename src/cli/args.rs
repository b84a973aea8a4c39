//! CLI argument definitions using clap.
//!
//! The tool has no subcommands: the `--translate` and `--compile` switches
//! select which phases run, and at least one of them is required.

use std::{ffi::OsString, path::PathBuf};

use clap::{CommandFactory, Parser, error::ErrorKind};

use crate::logging::LogLevel;
use crate::translator::Actions;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Translate or compile translation po/pot files to mo",
    long_about = None
)]
pub struct Arguments {
    /// Compile created translation files
    #[arg(short, long)]
    pub compile: bool,

    /// Create translation files
    #[arg(short, long)]
    pub translate: bool,

    /// Language codes (overrides config file) [default: fa en]
    #[arg(short, long, num_args = 1..)]
    pub languages: Option<Vec<String>>,

    /// Logging level
    #[arg(long, default_value = "NOTSET", value_name = "LEVEL")]
    pub log_level: LogLevel,

    /// Domain of the application (overrides config file) [default: base]
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Path to scan; catalogs are written below <PATH>/locales [default: .]
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Source language passed to xgettext (overrides config file) [default: Python]
    #[arg(long)]
    pub source_language: Option<String>,

    /// Source file extension to scan, can be repeated (overrides config file) [default: py]
    #[arg(short = 'e', long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Fail when xgettext or msgfmt exits with a non-zero status
    #[arg(long)]
    pub strict: bool,

    /// Process languages concurrently
    #[arg(long)]
    pub parallel: bool,

    /// xgettext program to run
    #[arg(long, env = "POMAKE_XGETTEXT", value_name = "PROGRAM")]
    pub xgettext: Option<String>,

    /// msgfmt program to run
    #[arg(long, env = "POMAKE_MSGFMT", value_name = "PROGRAM")]
    pub msgfmt: Option<String>,

    /// Write a default .pomakerc.json into <PATH> and exit
    #[arg(long)]
    pub init_config: bool,
}

impl Arguments {
    /// Returns false after printing help to stderr when the process was
    /// started without any argument.
    pub fn has_any_argument<I>(args: I) -> bool
    where
        I: IntoIterator<Item = OsString>,
    {
        if args.into_iter().nth(1).is_some() {
            return true;
        }
        let help = Self::command().render_help();
        eprintln!("{}", help);
        false
    }

    /// Accept the two-letter `-ll` spelling of `--log-level`, which clap
    /// cannot declare as a short flag.
    pub fn normalize<I>(args: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = OsString>,
    {
        args.into_iter()
            .map(|arg| {
                if arg == "-ll" {
                    OsString::from("--log-level")
                } else {
                    arg
                }
            })
            .collect()
    }

    pub fn actions(&self) -> Actions {
        Actions {
            translate: self.translate,
            compile: self.compile,
        }
    }

    /// The usage error reported when neither phase was selected.
    pub fn no_action_error() -> clap::Error {
        Self::command().error(ErrorKind::MissingRequiredArgument, "No action requested.")
    }

    pub fn root(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
