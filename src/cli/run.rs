use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use super::args::Arguments;
use crate::{
    config::{CONFIG_FILE_NAME, Config, default_config_json, load_config},
    scanner::ScanOptions,
    translator::{RunSummary, Settings, Translator, normalize_languages},
};

/// Outcome of a CLI invocation that got past configuration.
pub enum RunOutcome {
    ConfigCreated,
    Completed(RunSummary),
    /// The run failed; the error has already been logged.
    Failed,
}

pub fn run(args: Arguments) -> Result<RunOutcome> {
    let root = args.root();

    if args.init_config {
        init(&root)?;
        return Ok(RunOutcome::ConfigCreated);
    }

    let loaded = load_config(&root)?;
    match &loaded.path {
        Some(path) => info!(path = %path.display(), "loaded config file"),
        None => debug!("no config file found, using defaults"),
    }

    let settings = resolve_settings(args, loaded.config)?;
    let translator = Translator::new(settings);

    match translator.run() {
        Ok(summary) => Ok(RunOutcome::Completed(summary)),
        Err(err) => {
            error!(critical = true, "Error while running command.");
            error!("{}", err);
            Ok(RunOutcome::Failed)
        }
    }
}

/// Merge command-line values over config file values and check the result
/// the same way a config file is checked.
fn resolve_settings(args: Arguments, config: Config) -> Result<Settings> {
    let root = args.root();
    let actions = args.actions();

    let extensions = if args.extensions.is_empty() {
        config.extensions
    } else {
        args.extensions
    };

    let settings = Settings {
        languages: normalize_languages(args.languages.unwrap_or(config.languages)),
        actions,
        domain: args.domain.unwrap_or(config.domain),
        root,
        source_language: args.source_language.unwrap_or(config.source_language),
        scan: ScanOptions {
            extensions: extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect(),
            ignores: config.ignores,
        },
        xgettext: args.xgettext.unwrap_or(config.xgettext),
        msgfmt: args.msgfmt.unwrap_or(config.msgfmt),
        strict: args.strict || config.strict,
        parallel: args.parallel,
    };
    validate_settings(&settings)?;
    Ok(settings)
}

fn validate_settings(settings: &Settings) -> Result<()> {
    if settings.languages.iter().any(|lang| lang.trim().is_empty()) {
        anyhow::bail!("language codes must not be empty");
    }
    if settings.domain.trim().is_empty() {
        anyhow::bail!("domain must not be empty");
    }
    if settings.scan.extensions.iter().any(|ext| ext.is_empty()) {
        anyhow::bail!("source file extensions must not be empty");
    }
    Ok(())
}

fn init(root: &Path) -> Result<()> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    info!(path = %config_path.display(), "created config file");
    Ok(())
}
