//! Query resolution
//!
//! Turns the sparse override registry into a total function over
//! `(language, category)`. The fallback chain is:
//!
//! 1. non-empty override from the [`OverrideRegistry`]
//! 2. the category default from the [`CategoryCatalog`]
//! 3. a [`placeholder`] naming the category and language
//!
//! Resolution never fails and performs no I/O.

use crate::catalog::{Category, CategoryCatalog, Language};
use crate::registry::OverrideRegistry;
use serde::Serialize;

/// Where a resolved expression came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuerySource {
    /// Language-specific definition from the registry
    Override,
    /// Non-empty category default
    Default,
    /// Generated stand-in for a missing definition
    Placeholder,
}

impl QuerySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuerySource::Override => "override",
            QuerySource::Default => "default",
            QuerySource::Placeholder => "placeholder",
        }
    }
}

impl std::fmt::Display for QuerySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final expression for one `(language, category)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedQuery {
    pub language: Language,
    pub category: Category,
    pub expression: String,
    pub source: QuerySource,
}

/// Placeholder written when neither an override nor a default exists.
///
/// A query-language line comment naming the pair; never empty.
pub fn placeholder(language: &Language, category: &Category) -> String {
    format!("; No {} queries for {}", category, language)
}

/// Resolves query expressions against a registry and a category catalog.
pub struct Resolver<'a> {
    registry: &'a OverrideRegistry,
    categories: &'a CategoryCatalog,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a OverrideRegistry, categories: &'a CategoryCatalog) -> Self {
        Self {
            registry,
            categories,
        }
    }

    /// Resolve the effective expression for a pair.
    ///
    /// Unknown languages and categories are not errors; they fall through to
    /// the placeholder like any other missing definition.
    pub fn resolve(&self, language: &Language, category: &Category) -> ResolvedQuery {
        let (expression, source) = if let Some(expr) = self.registry.get(language, category) {
            (expr.to_string(), QuerySource::Override)
        } else {
            let default = self.categories.default_for(category);
            if default.is_empty() {
                (placeholder(language, category), QuerySource::Placeholder)
            } else {
                (default.to_string(), QuerySource::Default)
            }
        };

        ResolvedQuery {
            language: language.clone(),
            category: category.clone(),
            expression,
            source,
        }
    }

    /// Resolve every category of the catalog for one language, in catalog order.
    pub fn resolve_language(&self, language: &Language) -> Vec<ResolvedQuery> {
        self.categories
            .categories()
            .map(|category| self.resolve(language, category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_registry() -> OverrideRegistry {
        [("go", "functions", "FN_GO")].into_iter().collect()
    }

    #[test]
    fn test_override_returned_verbatim() {
        let registry = scenario_registry();
        let categories = CategoryCatalog::with_names(["functions", "classes"]);
        let resolver = Resolver::new(&registry, &categories);

        let resolved = resolver.resolve(&"go".into(), &"functions".into());
        assert_eq!(resolved.expression, "FN_GO");
        assert_eq!(resolved.source, QuerySource::Override);
    }

    #[test]
    fn test_placeholder_names_pair() {
        let registry = scenario_registry();
        let categories = CategoryCatalog::with_names(["functions", "classes"]);
        let resolver = Resolver::new(&registry, &categories);

        let resolved = resolver.resolve(&"ruby".into(), &"classes".into());
        assert_eq!(resolved.source, QuerySource::Placeholder);
        assert_eq!(resolved.expression, "; No classes queries for ruby");
        assert!(resolved.expression.contains("classes"));
        assert!(resolved.expression.contains("ruby"));
    }

    #[test]
    fn test_default_used_when_no_override() {
        let registry = scenario_registry();
        let categories = CategoryCatalog::new([("functions", "(fn) @function"), ("classes", "")]);
        let resolver = Resolver::new(&registry, &categories);

        let ruby_fn = resolver.resolve(&"ruby".into(), &"functions".into());
        assert_eq!(ruby_fn.expression, "(fn) @function");
        assert_eq!(ruby_fn.source, QuerySource::Default);

        // Override still wins over a non-empty default
        let go_fn = resolver.resolve(&"go".into(), &"functions".into());
        assert_eq!(go_fn.expression, "FN_GO");
    }

    #[test]
    fn test_unknown_pair_falls_through() {
        let registry = OverrideRegistry::new();
        let categories = CategoryCatalog::builtin();
        let resolver = Resolver::new(&registry, &categories);

        let resolved = resolver.resolve(&"elm".into(), &"lifetimes".into());
        assert_eq!(resolved.source, QuerySource::Placeholder);
        assert!(!resolved.expression.is_empty());
    }

    #[test]
    fn test_resolve_language_covers_catalog() {
        let registry = OverrideRegistry::builtin();
        let categories = CategoryCatalog::builtin();
        let resolver = Resolver::new(&registry, &categories);

        let resolved = resolver.resolve_language(&"rust".into());
        assert_eq!(resolved.len(), 6);
        assert!(resolved.iter().all(|r| r.source == QuerySource::Override));

        let resolved = resolver.resolve_language(&"zig".into());
        assert!(resolved.iter().all(|r| r.source == QuerySource::Placeholder));
    }
}
