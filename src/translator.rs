//! The extract → patch → compile pipeline.

use std::{collections::BTreeSet, path::PathBuf};

use rayon::prelude::*;
use tracing::{info, info_span};

use crate::{
    catalog::{self, CatalogLayout},
    config::{DEFAULT_DOMAIN, DEFAULT_LANGUAGES, DEFAULT_SOURCE_LANGUAGE},
    error::Result,
    scanner::{self, ScanOptions},
    tools::{DEFAULT_MSGFMT, DEFAULT_XGETTEXT, SystemRunner, ToolInvocation, ToolRunner},
};

/// Which phases a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Actions {
    pub translate: bool,
    pub compile: bool,
}

impl Actions {
    pub fn any(self) -> bool {
        self.translate || self.compile
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub languages: BTreeSet<String>,
    pub actions: Actions,
    pub domain: String,
    pub root: PathBuf,
    pub source_language: String,
    pub scan: ScanOptions,
    pub xgettext: String,
    pub msgfmt: String,
    pub strict: bool,
    pub parallel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            languages: normalize_languages(DEFAULT_LANGUAGES.iter().copied()),
            actions: Actions::default(),
            domain: DEFAULT_DOMAIN.to_string(),
            root: PathBuf::from("."),
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            scan: ScanOptions::default(),
            xgettext: DEFAULT_XGETTEXT.to_string(),
            msgfmt: DEFAULT_MSGFMT.to_string(),
            strict: false,
            parallel: false,
        }
    }
}

/// De-duplicate and sort language codes.
pub fn normalize_languages<I, S>(languages: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    languages.into_iter().map(Into::into).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub languages: Vec<String>,
    pub source_files: usize,
    pub extracted: usize,
    pub compiled: usize,
}

pub struct Translator<R = SystemRunner> {
    settings: Settings,
    layout: CatalogLayout,
    runner: R,
}

impl Translator<SystemRunner> {
    pub fn new(settings: Settings) -> Self {
        let runner = SystemRunner::new(settings.strict);
        Self::with_runner(settings, runner)
    }
}

impl<R: ToolRunner> Translator<R> {
    pub fn with_runner(settings: Settings, runner: R) -> Self {
        info!(
            languages = ?settings.languages,
            domain = %settings.domain,
            root = %settings.root.display(),
            "initializing translator"
        );
        let layout = CatalogLayout::new(&settings.root, &settings.domain);
        Self {
            settings,
            layout,
            runner,
        }
    }

    pub fn layout(&self) -> &CatalogLayout {
        &self.layout
    }

    /// Extract, then compile, as selected by the settings. The first error
    /// aborts whatever work remains.
    pub fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary {
            languages: self.settings.languages.iter().cloned().collect(),
            ..Default::default()
        };

        if self.settings.actions.translate {
            let (source_files, extracted) = self.extract()?;
            summary.source_files = source_files;
            summary.extracted = extracted;
        }
        if self.settings.actions.compile {
            summary.compiled = self.compile()?;
        }

        info!("translation completed successfully");
        Ok(summary)
    }

    /// Run the extractor for every language and patch the resulting catalogs.
    ///
    /// Returns the number of source files passed to the extractor and the
    /// number of catalogs written.
    pub fn extract(&self) -> Result<(usize, usize)> {
        info!(program = %self.settings.xgettext, "extracting translatable strings");
        let sources = scanner::scan_files(&self.settings.root, &self.settings.scan)?.files;

        let extracted = self.for_each_language(|lang| self.extract_language(lang, &sources))?;
        Ok((sources.len(), extracted))
    }

    fn extract_language(&self, lang: &str, sources: &[PathBuf]) -> Result<()> {
        let _span = info_span!("extract", lang).entered();
        info!("creating translation catalog");

        self.layout.ensure_messages_dir(lang)?;
        let po_path = self.layout.po_path(lang);

        let join_existing = po_path.exists();
        if join_existing {
            info!(path = %po_path.display(), "existing catalog found, joining new strings into it");
        }

        let invocation = ToolInvocation::xgettext(
            &self.settings.xgettext,
            &self.settings.source_language,
            &self.settings.domain,
            &po_path,
            sources,
            join_existing,
        );
        self.runner.run(&invocation)?;

        catalog::patch_charset(&po_path)?;
        Ok(())
    }

    /// Run the compiler for every language. Returns the number of catalogs
    /// compiled.
    pub fn compile(&self) -> Result<usize> {
        info!(program = %self.settings.msgfmt, "compiling catalogs");
        self.for_each_language(|lang| self.compile_language(lang))
    }

    fn compile_language(&self, lang: &str) -> Result<()> {
        let _span = info_span!("compile", lang).entered();
        info!("compiling binary catalog");

        let invocation = ToolInvocation::msgfmt(
            &self.settings.msgfmt,
            &self.layout.mo_path(lang),
            &self.layout.po_path(lang),
        );
        self.runner.run(&invocation)?;
        Ok(())
    }

    fn for_each_language<F>(&self, work: F) -> Result<usize>
    where
        F: Fn(&str) -> Result<()> + Sync,
    {
        let languages = &self.settings.languages;
        if self.settings.parallel {
            languages
                .par_iter()
                .try_for_each(|lang| work(lang))?;
        } else {
            for lang in languages {
                work(lang)?;
            }
        }
        Ok(languages.len())
    }
}
