//! Wiring of catalogs, registry and output root for one run.

use crate::catalog::{CategoryCatalog, LanguageCatalog};
use crate::config::QuerygenConfig;
use crate::materializer::{MaterializeObserver, MaterializeReport, Materializer, DEFAULT_OUTPUT_DIR};
use crate::registry::OverrideRegistry;
use crate::resolver::Resolver;
use crate::Result;
use std::path::{Path, PathBuf};

pub struct Project {
    pub languages: LanguageCatalog,
    pub categories: CategoryCatalog,
    pub registry: OverrideRegistry,
    pub root: PathBuf,
}

impl Project {
    /// Built-in catalogs and registry writing under `root`.
    pub fn builtin(root: impl Into<PathBuf>) -> Self {
        Self {
            languages: LanguageCatalog::builtin(),
            categories: CategoryCatalog::builtin(),
            registry: OverrideRegistry::builtin(),
            root: root.into(),
        }
    }

    /// Built-ins overlaid with an optional config. `out` beats the config's `output`.
    pub fn from_config(config: Option<&QuerygenConfig>, out: Option<PathBuf>) -> Self {
        let root = out
            .or_else(|| config.map(QuerygenConfig::output_dir))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let mut project = Self::builtin(root);
        if let Some(config) = config {
            project.registry.merge(config.override_registry());
        }
        project
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.registry, &self.categories)
    }

    pub fn artifact_count(&self) -> usize {
        self.languages.len() * self.categories.len()
    }

    /// Warn about out-of-catalog overrides, then write every artifact.
    pub fn materialize(&self, observer: &mut dyn MaterializeObserver) -> Result<MaterializeReport> {
        self.registry.warn_unknown(&self.languages, &self.categories);
        Materializer::new(&self.root).materialize_with(
            &self.languages,
            &self.categories,
            &self.resolver(),
            observer,
        )
    }
}
