use crate::materializer::DEFAULT_OUTPUT_DIR;
use crate::registry::OverrideRegistry;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Contents of `querygen.toml`. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuerygenConfig {
    /// Root output directory
    pub output: Option<String>,
    /// `[overrides.<language>] <category> = "<query>"`, merged over the built-ins
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, BTreeMap<String, String>>,
}

impl QuerygenConfig {
    /// Output root, falling back to [`DEFAULT_OUTPUT_DIR`].
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(self.output.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR))
    }

    pub fn override_registry(&self) -> OverrideRegistry {
        self.overrides
            .iter()
            .flat_map(|(language, categories)| {
                categories
                    .iter()
                    .map(move |(category, query)| (language.as_str(), category.as_str(), query.clone()))
            })
            .collect()
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("querygen.toml")
}

/// Load an explicitly named config file; a missing file yields `Ok(None)`.
pub fn load_config(path: &Path) -> Result<Option<QuerygenConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    let config: QuerygenConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &QuerygenConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}
