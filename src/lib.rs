//! Pomake - gettext catalog automation
//!
//! Pomake scans a source tree, runs `xgettext` once per language to create or
//! update `locales/<lang>/LC_MESSAGES/<domain>.po`, fixes the declared charset,
//! and runs `msgfmt` to produce the matching `.mo` files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, exit status, summary)
//! - `config`: Configuration file loading and parsing
//! - `catalog`: Catalog paths, directory creation and charset patching
//! - `error`: Error types for the extraction pipeline
//! - `logging`: Log level parsing and subscriber setup
//! - `scanner`: Source file discovery
//! - `tools`: External tool invocation
//! - `translator`: The extract and compile pipeline

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod scanner;
pub mod tools;
pub mod translator;
