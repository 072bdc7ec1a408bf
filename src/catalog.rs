//! Language and category catalogs
//!
//! The catalogs decide *what* gets materialized: every language in the
//! [`LanguageCatalog`] receives one artifact per category in the
//! [`CategoryCatalog`]. Both are immutable once built. The built-in tables
//! below are the process-wide defaults; tests inject their own catalogs.

use serde::Serialize;
use std::collections::HashSet;

/// Languages materialized by default, in output order.
pub const BUILTIN_LANGUAGES: &[&str] = &[
    // Most popular
    "javascript", "typescript", "python", "java", "c_sharp", "php",
    // Systems & performance
    "go", "rust", "cpp", "c", "fortran", "cobol",
    // Mobile & cross-platform
    "swift", "kotlin", "dart", "objective_c",
    // Functional & academic
    "scala", "haskell", "elixir", "erlang", "clojure", "ocaml", "f_sharp",
    // Data science & analytics
    "r", "julia", "sql",
    // Web & markup
    "html", "css", "json", "yaml", "toml",
    // Scripting & automation
    "bash", "powershell", "perl", "ruby", "lua", "groovy",
    // Modern & emerging
    "zig", "nim", "crystal", "solidity", "vb",
];

/// Query categories and their defaults. Defaults carry no language knowledge.
pub const BUILTIN_CATEGORIES: &[(&str, &str)] = &[
    ("imports", ""),
    ("functions", ""),
    ("classes", ""),
    ("decorators", ""),
    ("generics", ""),
    ("patternMatching", ""),
];

/// Identifier of a supported source grammar (e.g. `rust`, `c_sharp`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Identifier of a structural query kind (e.g. `imports`, `patternMatching`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the artifact holding this category's query.
    pub fn file_name(&self) -> String {
        format!("{}.scm", self.0)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A category together with its catalog-wide default expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub category: Category,
    pub default: String,
}

/// Ordered, fixed set of query categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    entries: Vec<CategoryEntry>,
}

impl CategoryCatalog {
    /// Build a catalog from `(name, default)` pairs. Later duplicates are dropped.
    pub fn new<I, C, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, D)>,
        C: Into<String>,
        D: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for (name, default) in entries {
            let category = Category::new(name);
            if !seen.insert(category.clone()) {
                tracing::warn!("Duplicate category {} in catalog, keeping first", category);
                continue;
            }
            out.push(CategoryEntry {
                category,
                default: default.into(),
            });
        }
        Self { entries: out }
    }

    /// Categories with empty defaults, for tests and ad hoc catalogs.
    pub fn with_names<I, C>(names: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self::new(names.into_iter().map(|n| (n, String::new())))
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_CATEGORIES.iter().copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryEntry> {
        self.entries.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter().map(|e| &e.category)
    }

    /// Default expression for a category; empty for categories outside the catalog.
    pub fn default_for(&self, category: &Category) -> &str {
        self.entries
            .iter()
            .find(|e| &e.category == category)
            .map(|e| e.default.as_str())
            .unwrap_or("")
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.entries.iter().any(|e| &e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered set of languages to materialize. Order only affects scheduling.
#[derive(Debug, Clone, Default)]
pub struct LanguageCatalog {
    languages: Vec<Language>,
}

impl LanguageCatalog {
    /// Build a catalog, dropping repeated languages (first occurrence wins).
    pub fn new<I, L>(names: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut languages = Vec::new();
        for name in names {
            let language = Language::new(name);
            if !seen.insert(language.clone()) {
                tracing::warn!("Duplicate language {} in catalog, keeping first", language);
                continue;
            }
            languages.push(language);
        }
        Self { languages }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_LANGUAGES.iter().copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    pub fn contains(&self, language: &Language) -> bool {
        self.languages.contains(language)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_sizes() {
        assert_eq!(LanguageCatalog::builtin().len(), 42);
        assert_eq!(CategoryCatalog::builtin().len(), 6);
    }

    #[test]
    fn test_builtin_defaults_are_empty() {
        let categories = CategoryCatalog::builtin();
        for entry in categories.iter() {
            assert!(entry.default.is_empty(), "{} has a default", entry.category);
        }
    }

    #[test]
    fn test_language_duplicates_dropped() {
        let catalog = LanguageCatalog::new(["go", "ruby", "go"]);
        let names: Vec<&str> = catalog.iter().map(Language::as_str).collect();
        assert_eq!(names, vec!["go", "ruby"]);
    }

    #[test]
    fn test_category_order_preserved() {
        let catalog = CategoryCatalog::with_names(["functions", "classes"]);
        let names: Vec<&str> = catalog.categories().map(Category::as_str).collect();
        assert_eq!(names, vec!["functions", "classes"]);
        assert_eq!(Category::from("classes").file_name(), "classes.scm");
    }

    #[test]
    fn test_default_for_unknown_category() {
        let catalog = CategoryCatalog::new([("imports", "(import) @import")]);
        assert_eq!(catalog.default_for(&"imports".into()), "(import) @import");
        assert_eq!(catalog.default_for(&"lifetimes".into()), "");
    }
}
