//! Engine configuration
//!
//! Allowed page sizes and the initial page size. Loaded from JSON; any
//! missing field takes its default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Compare selection is capped at this many listings
pub const COMPARE_CAPACITY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Page sizes offered to the user, ascending
    pub page_sizes: Vec<usize>,
    pub default_page_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            page_sizes: vec![10, DEFAULT_PAGE_SIZE, 50, 100],
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {:?}", path))?;

        Self::from_json(&contents).with_context(|| format!("Invalid engine config: {:?}", path))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: EngineConfig =
            serde_json::from_str(json).with_context(|| "Failed to parse engine config JSON")?;

        config.page_sizes.sort_unstable();
        config.page_sizes.dedup();
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_sizes.is_empty() {
            anyhow::bail!("page_sizes must not be empty");
        }
        if self.page_sizes.contains(&0) {
            anyhow::bail!("page_sizes must be positive");
        }
        if !self.page_sizes.contains(&self.default_page_size) {
            anyhow::bail!(
                "default_page_size {} is not one of {:?}",
                self.default_page_size,
                self.page_sizes
            );
        }
        Ok(())
    }
}
