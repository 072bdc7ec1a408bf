//! Override Registry
//!
//! Sparse mapping `(language, category) -> query expression` holding only the
//! language-specific definitions. Everything absent here falls through to the
//! category default and then to the placeholder (see [`crate::resolver`]).

use crate::catalog::{Category, CategoryCatalog, Language, LanguageCatalog};
use std::collections::BTreeMap;

type Definitions = &'static [(&'static str, &'static str)];

/// Language-specific query definitions shipped with the tool.
pub const BUILTIN_DEFINITIONS: &[(&str, Definitions)] = &[
    ("typescript", &[
        ("imports", "[(import_statement) (import_require)] @import"),
        ("functions", "[(function_declaration) (method_definition) (arrow_function)] @function"),
        ("classes", "[(class_declaration) (interface_declaration) (type_alias_declaration)] @class"),
        ("decorators", "[(decorator) @decorator]"),
        ("generics", "[(type_parameter) @generic]"),
    ]),
    ("javascript", &[
        ("imports", "[(import_statement) (import_require)] @import"),
        ("functions", "[(function_declaration) (method_definition) (arrow_function)] @function"),
        ("classes", "[(class_declaration)] @class"),
        ("decorators", "[(decorator) @decorator]"),
    ]),
    ("python", &[
        ("imports", "[(import_statement) (import_from_statement)] @import"),
        ("functions", "[(function_definition)] @function"),
        ("classes", "[(class_definition)] @class"),
        ("decorators", "[(decorator) @decorator]"),
    ]),
    ("java", &[
        ("imports", "[(import_declaration)] @import"),
        ("functions", "[(method_declaration) (constructor_declaration)] @function"),
        ("classes", "[(class_declaration) (interface_declaration) (enum_declaration)] @class"),
        ("decorators", "[(marker_annotation) (annotation)] @decorator"),
        ("generics", "[(type_parameter) @generic]"),
    ]),
    ("c_sharp", &[
        ("imports", "[(using_directive)] @import"),
        ("functions", "[(method_declaration)] @function"),
        ("classes", "[(class_declaration) (interface_declaration) (struct_declaration)] @class"),
        ("decorators", "[(attribute_list) @decorator]"),
        ("generics", "[(type_parameter_list) @generic]"),
    ]),
    ("php", &[
        ("imports", "[(namespace_use_declaration)] @import"),
        ("functions", "[(function_definition) (method_declaration)] @function"),
        ("classes", "[(class_declaration) (interface_declaration) (trait_declaration)] @class"),
        ("decorators", "[(attribute_group) @decorator]"),
    ]),
    ("rust", &[
        ("imports", "[(use_declaration)] @import"),
        ("functions", "[(function_item)] @function"),
        ("classes", "[(struct_item) (enum_item) (trait_item) (impl_item)] @class"),
        ("decorators", "[(attribute_item) @decorator]"),
        ("generics", "[(type_parameters) @generic]"),
        ("patternMatching", "[(match_expression)] @match"),
    ]),
    ("go", &[
        ("imports", "[(import_spec)] @import"),
        ("functions", "[(function_declaration) (method_declaration)] @function"),
        ("classes", "[(type_spec)] @class"),
        ("generics", "[(type_parameter_list) @generic]"),
    ]),
    ("cpp", &[
        ("imports", "[(preproc_include)] @import"),
        ("functions", "[(function_definition)] @function"),
        ("classes", "[(class_specifier) (struct_specifier)] @class"),
        ("decorators", "[(attribute_specifier) @decorator]"),
        ("generics", "[(template_parameter_list) @generic]"),
    ]),
    ("c", &[
        ("imports", "[(preproc_include)] @import"),
        ("functions", "[(function_definition)] @function"),
        ("classes", "[(struct_specifier) (enum_specifier)] @class"),
    ]),
    ("bash", &[
        ("functions", "[(function_definition)] @function"),
    ]),
    ("ruby", &[
        ("imports", r#"[(call method: (identifier) @method (#match? @method "^(require|include|extend)$"))] @import"#),
        ("functions", "[(method)] @function"),
        ("classes", "[(class) (module)] @class"),
    ]),
    ("kotlin", &[
        ("imports", "[(import_header)] @import"),
        ("functions", "[(function_declaration)] @function"),
        ("classes", "[(class_declaration) (object_declaration)] @class"),
        ("decorators", "[(annotation) @decorator]"),
        ("generics", "[(type_parameter) @generic]"),
    ]),
    ("swift", &[
        ("imports", "[(import_declaration)] @import"),
        ("functions", "[(function_declaration)] @function"),
        ("classes", "[(class_declaration) (struct_declaration) (protocol_declaration) (extension_declaration)] @class"),
        ("decorators", "[(attribute) @decorator]"),
        ("generics", "[(generic_parameter) @generic]"),
    ]),
    ("lua", &[
        ("functions", "[(function_call) (function_definition)] @function"),
    ]),
    ("scala", &[
        ("imports", "[(import_declaration)] @import"),
        ("functions", "[(function_definition)] @function"),
        ("classes", "[(class_definition) (object_definition) (trait_definition)] @class"),
        ("generics", "[(type_parameters) @generic]"),
    ]),
    ("dart", &[
        ("imports", "[(import_or_export)] @import"),
        ("functions", "[(function_signature)] @function"),
        ("classes", "[(class_definition)] @class"),
        ("decorators", "[(annotation) @decorator]"),
    ]),
    ("elixir", &[
        ("functions", r#"[(call target: (identifier) @def (#match? @def "^(def|defp)$"))] @function"#),
        ("classes", r#"[(call target: (identifier) @defmodule (#match? @defmodule "^defmodule$"))] @class"#),
    ]),
];

/// An override whose language or category is missing from the catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntry {
    pub language: Language,
    pub category: Category,
    pub language_known: bool,
    pub category_known: bool,
}

/// Sparse `(language, category) -> expression` map.
///
/// Keys are composite so lookups never depend on attribute-style access;
/// `BTreeMap` keeps iteration (and anything reported from it) deterministic.
#[derive(Debug, Clone, Default)]
pub struct OverrideRegistry {
    entries: BTreeMap<(Language, Category), String>,
}

impl OverrideRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated from [`BUILTIN_DEFINITIONS`].
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (language, definitions) in BUILTIN_DEFINITIONS {
            for (category, expression) in *definitions {
                registry.insert(*language, *category, *expression);
            }
        }
        registry
    }

    /// Insert or replace an override. Empty expressions remove the entry,
    /// since an empty override means "no definition".
    pub fn insert(
        &mut self,
        language: impl Into<Language>,
        category: impl Into<Category>,
        expression: impl Into<String>,
    ) {
        let key = (language.into(), category.into());
        let expression = expression.into();
        if expression.is_empty() {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, expression);
        }
    }

    /// Overlay another registry on top of this one; `other` wins on conflicts.
    pub fn merge(&mut self, other: OverrideRegistry) {
        self.entries.extend(other.entries);
    }

    /// Non-empty override for a pair, if any.
    pub fn get(&self, language: &Language, category: &Category) -> Option<&str> {
        self.entries
            .get(&(language.clone(), category.clone()))
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Number of overrides defined for one language.
    pub fn count_for(&self, language: &Language) -> usize {
        self.entries.keys().filter(|(l, _)| l == language).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that can never reach an artifact because their language or
    /// category is not in the catalogs. They are not errors: output is driven
    /// by the catalog cross product, not by the registry's keys.
    pub fn unknown_entries(
        &self,
        languages: &LanguageCatalog,
        categories: &CategoryCatalog,
    ) -> Vec<UnknownEntry> {
        self.entries
            .keys()
            .filter_map(|(language, category)| {
                let language_known = languages.contains(language);
                let category_known = categories.contains(category);
                if language_known && category_known {
                    return None;
                }
                Some(UnknownEntry {
                    language: language.clone(),
                    category: category.clone(),
                    language_known,
                    category_known,
                })
            })
            .collect()
    }

    /// Log every out-of-catalog entry once.
    pub fn warn_unknown(&self, languages: &LanguageCatalog, categories: &CategoryCatalog) -> usize {
        let unknown = self.unknown_entries(languages, categories);
        for entry in &unknown {
            let reason = match (entry.language_known, entry.category_known) {
                (false, false) => "language and category not in catalog",
                (false, true) => "language not in catalog",
                _ => "category not in catalog",
            };
            tracing::warn!(
                "Ignoring override {}/{}: {}",
                entry.language,
                entry.category,
                reason
            );
        }
        unknown.len()
    }
}

impl<L, C, E> FromIterator<(L, C, E)> for OverrideRegistry
where
    L: Into<Language>,
    C: Into<Category>,
    E: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (L, C, E)>>(iter: T) -> Self {
        let mut registry = Self::new();
        for (language, category, expression) in iter {
            registry.insert(language, category, expression);
        }
        registry
    }
}
