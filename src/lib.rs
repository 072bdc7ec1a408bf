//! # Querygen - Tree-sitter query pack materializer
//!
//! Resolves a query expression for every (language, category) pair of a
//! fixed catalog and writes it to `<root>/<language>/<category>.scm`, so that
//! query-driven analysis tools can load per-language queries from disk.
//!
//! Querygen provides:
//! - Language and category catalogs with built-in defaults
//! - A sparse override registry of language-specific queries
//! - A total resolver with a deterministic placeholder fallback
//! - An idempotent, full-overwrite materializer

pub mod catalog;
pub mod registry;
pub mod resolver;
pub mod materializer;
pub mod project;
pub mod config;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use catalog::{Category, CategoryCatalog, Language, LanguageCatalog};
pub use registry::OverrideRegistry;
pub use resolver::{QuerySource, ResolvedQuery, Resolver};
pub use materializer::{MaterializeReport, Materializer};
pub use project::Project;

use std::path::PathBuf;

/// Result type alias for Querygen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Querygen operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to create output root {}: {source}", path.display())]
    CreateRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory for {language} at {}: {source}", path.display())]
    CreateDir {
        language: Language,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {language}/{category} to {}: {source}", path.display())]
    Write {
        language: Language,
        category: Category,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}
