//! Materializer - projects resolved queries onto the filesystem
//!
//! Layout: `<root>/<language>/<category>.scm`. Every run writes the full
//! cross product of the catalogs; each artifact is truncated and rewritten,
//! never merged. A failed directory creation or write aborts the run with the
//! failing pair in the error. Artifacts already written stay on disk.

use crate::catalog::{Category, CategoryCatalog, Language, LanguageCatalog};
use crate::resolver::{QuerySource, Resolver};
use crate::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Root directory used when neither the CLI nor the config names one.
pub const DEFAULT_OUTPUT_DIR: &str = "resources/tree-sitter-queries";

/// Directory holding one language's artifacts.
pub fn language_dir(root: &Path, language: &Language) -> PathBuf {
    root.join(language.as_str())
}

/// Path of the artifact for a pair.
pub fn artifact_path(root: &Path, language: &Language, category: &Category) -> PathBuf {
    language_dir(root, language).join(category.file_name())
}

/// One artifact produced by a run.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactRecord {
    pub language: Language,
    pub category: Category,
    pub path: PathBuf,
    pub source: QuerySource,
    pub bytes: usize,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct MaterializeReport {
    pub root: PathBuf,
    pub languages: usize,
    pub categories: usize,
    /// Artifacts in write order
    pub artifacts: Vec<ArtifactRecord>,
    /// blake3 over every `(language, category, content)` in write order
    pub digest: String,
}

impl MaterializeReport {
    pub fn count(&self, source: QuerySource) -> usize {
        self.artifacts.iter().filter(|a| a.source == source).count()
    }
}

impl std::fmt::Display for MaterializeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  Languages:    {}", self.languages)?;
        writeln!(f, "  Categories:   {}", self.categories)?;
        writeln!(f, "  Artifacts:    {}", self.artifacts.len())?;
        writeln!(f, "  Overrides:    {}", self.count(QuerySource::Override))?;
        writeln!(f, "  Defaults:     {}", self.count(QuerySource::Default))?;
        writeln!(f, "  Placeholders: {}", self.count(QuerySource::Placeholder))?;
        write!(f, "  Digest:       {}", self.digest)
    }
}

/// Progress hook invoked after each artifact is written.
pub trait MaterializeObserver {
    fn language_started(&mut self, _language: &Language) {}
    fn artifact_written(&mut self, _record: &ArtifactRecord) {}
}

/// Observer that ignores every event.
pub struct NoopObserver;

impl MaterializeObserver for NoopObserver {}

/// Writes resolved queries under a root directory.
pub struct Materializer {
    root: PathBuf,
}

impl Materializer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Materialize every `(language, category)` pair of the catalogs.
    pub fn materialize(
        &self,
        languages: &LanguageCatalog,
        categories: &CategoryCatalog,
        resolver: &Resolver<'_>,
    ) -> Result<MaterializeReport> {
        self.materialize_with(languages, categories, resolver, &mut NoopObserver)
    }

    /// Same as [`Materializer::materialize`], reporting progress to `observer`.
    pub fn materialize_with(
        &self,
        languages: &LanguageCatalog,
        categories: &CategoryCatalog,
        resolver: &Resolver<'_>,
        observer: &mut dyn MaterializeObserver,
    ) -> Result<MaterializeReport> {
        tracing::info!(
            "Materializing {} languages x {} categories into {}",
            languages.len(),
            categories.len(),
            self.root.display()
        );

        std::fs::create_dir_all(&self.root).map_err(|source| Error::CreateRoot {
            path: self.root.clone(),
            source,
        })?;

        let mut hasher = blake3::Hasher::new();
        let mut artifacts = Vec::with_capacity(languages.len() * categories.len());

        for language in languages.iter() {
            observer.language_started(language);
            let dir = language_dir(&self.root, language);
            std::fs::create_dir_all(&dir).map_err(|source| Error::CreateDir {
                language: language.clone(),
                path: dir.clone(),
                source,
            })?;

            for category in categories.categories() {
                let resolved = resolver.resolve(language, category);
                let path = artifact_path(&self.root, language, category);

                std::fs::write(&path, resolved.expression.as_bytes()).map_err(|source| {
                    Error::Write {
                        language: language.clone(),
                        category: category.clone(),
                        path: path.clone(),
                        source,
                    }
                })?;
                tracing::debug!("Wrote {}/{} ({})", language, category, resolved.source);

                // Length-prefix each field so adjacent values cannot alias
                for field in [language.as_str(), category.as_str(), resolved.expression.as_str()] {
                    hasher.update(&(field.len() as u64).to_le_bytes());
                    hasher.update(field.as_bytes());
                }

                let record = ArtifactRecord {
                    language: language.clone(),
                    category: category.clone(),
                    path,
                    source: resolved.source,
                    bytes: resolved.expression.len(),
                };
                observer.artifact_written(&record);
                artifacts.push(record);
            }
        }

        let report = MaterializeReport {
            root: self.root.clone(),
            languages: languages.len(),
            categories: categories.len(),
            artifacts,
            digest: hasher.finalize().to_string(),
        };
        tracing::info!(
            "Wrote {} artifacts ({} overrides, {} placeholders)",
            report.artifacts.len(),
            report.count(QuerySource::Override),
            report.count(QuerySource::Placeholder)
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::OverrideRegistry;

    fn scenario() -> (LanguageCatalog, CategoryCatalog, OverrideRegistry) {
        (
            LanguageCatalog::new(["go", "ruby"]),
            CategoryCatalog::with_names(["functions", "classes"]),
            [("go", "functions", "FN_GO")].into_iter().collect(),
        )
    }

    fn read(root: &Path, rel: &str) -> String {
        std::fs::read_to_string(root.join(rel)).unwrap()
    }

    #[test]
    fn test_artifact_path_layout() {
        let path = artifact_path(Path::new("out"), &"rust".into(), &"patternMatching".into());
        assert_eq!(path, Path::new("out").join("rust").join("patternMatching.scm"));
    }

    #[test]
    fn test_scenario_output() {
        let dir = tempfile::tempdir().unwrap();
        let (languages, categories, registry) = scenario();
        let resolver = Resolver::new(&registry, &categories);

        let report = Materializer::new(dir.path())
            .materialize(&languages, &categories, &resolver)
            .unwrap();

        assert_eq!(report.artifacts.len(), 4);
        assert_eq!(report.count(QuerySource::Override), 1);
        assert_eq!(read(dir.path(), "go/functions.scm"), "FN_GO");
        assert_eq!(read(dir.path(), "go/classes.scm"), "; No classes queries for go");
        assert_eq!(read(dir.path(), "ruby/functions.scm"), "; No functions queries for ruby");
        assert_eq!(read(dir.path(), "ruby/classes.scm"), "; No classes queries for ruby");
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let (languages, categories, registry) = scenario();
        let resolver = Resolver::new(&registry, &categories);

        std::fs::create_dir_all(dir.path().join("go")).unwrap();
        std::fs::write(
            dir.path().join("go/functions.scm"),
            "a much longer hand-edited query that must not survive the run",
        )
        .unwrap();

        Materializer::new(dir.path())
            .materialize(&languages, &categories, &resolver)
            .unwrap();

        assert_eq!(read(dir.path(), "go/functions.scm"), "FN_GO");
    }

    #[test]
    fn test_digest_stable_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let (languages, categories, registry) = scenario();
        let resolver = Resolver::new(&registry, &categories);
        let materializer = Materializer::new(dir.path());

        let first = materializer.materialize(&languages, &categories, &resolver).unwrap();
        let second = materializer.materialize(&languages, &categories, &resolver).unwrap();
        assert_eq!(first.digest, second.digest);

        let changed: OverrideRegistry = [("go", "functions", "FN_GO_2")].into_iter().collect();
        let resolver = Resolver::new(&changed, &categories);
        let third = materializer.materialize(&languages, &categories, &resolver).unwrap();
        assert_ne!(first.digest, third.digest);
    }

    #[test]
    fn test_write_failure_names_pair() {
        let dir = tempfile::tempdir().unwrap();
        let (languages, categories, registry) = scenario();
        let resolver = Resolver::new(&registry, &categories);

        // A directory squatting on the artifact path makes the write fail
        std::fs::create_dir_all(dir.path().join("ruby/classes.scm")).unwrap();

        let err = Materializer::new(dir.path())
            .materialize(&languages, &categories, &resolver)
            .unwrap_err();

        match &err {
            Error::Write { language, category, .. } => {
                assert_eq!(language.as_str(), "ruby");
                assert_eq!(category.as_str(), "classes");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("ruby/classes"));

        // Earlier artifacts are left in place
        assert_eq!(read(dir.path(), "go/functions.scm"), "FN_GO");
        assert_eq!(read(dir.path(), "ruby/functions.scm"), "; No functions queries for ruby");
    }

    #[test]
    fn test_create_dir_failure_names_language() {
        let dir = tempfile::tempdir().unwrap();
        let (languages, categories, registry) = scenario();
        let resolver = Resolver::new(&registry, &categories);

        std::fs::write(dir.path().join("go"), "not a directory").unwrap();

        let err = Materializer::new(dir.path())
            .materialize(&languages, &categories, &resolver)
            .unwrap_err();
        assert!(matches!(err, Error::CreateDir { ref language, .. } if language.as_str() == "go"));
    }

    #[test]
    fn test_observer_sees_every_artifact() {
        struct Counter {
            languages: usize,
            artifacts: usize,
        }
        impl MaterializeObserver for Counter {
            fn language_started(&mut self, _language: &Language) {
                self.languages += 1;
            }
            fn artifact_written(&mut self, _record: &ArtifactRecord) {
                self.artifacts += 1;
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let (languages, categories, registry) = scenario();
        let resolver = Resolver::new(&registry, &categories);
        let mut counter = Counter { languages: 0, artifacts: 0 };

        Materializer::new(dir.path())
            .materialize_with(&languages, &categories, &resolver, &mut counter)
            .unwrap();

        assert_eq!(counter.languages, 2);
        assert_eq!(counter.artifacts, 4);
    }
}
