//! Preset files
//!
//! A preset is a small YAML file that pre-populates a selection:
//!
//! ```yaml
//! version: 0.1.0
//! language: typescript
//! backend: supabase
//! auth: supabase-auth
//! role: admin
//! ```
//!
//! Every field is optional. Ids are validated when the preset is applied.

pub mod version;

use crate::catalog::{Category, Choice};
use crate::error::{Result, StackError};
use crate::guide::Role;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use version::check_compatibility;

/// Environment variable naming a preset to load when none is given
pub const PRESET_ENV: &str = "STACKSTART_PRESET";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Semver of the CLI the preset was written for
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub backend: Option<String>,

    #[serde(default)]
    pub database: Option<String>,

    #[serde(default)]
    pub auth: Option<String>,

    /// Role used for API examples
    #[serde(default)]
    pub role: Option<String>,
}

impl Preset {
    /// Parse a preset from YAML text
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a preset file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StackError::preset(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let preset = Self::parse(&content)?;
        tracing::info!(path = %path.display(), "loaded preset");
        Ok(preset)
    }

    /// Preset path from [`PRESET_ENV`], if set and non-empty
    pub fn env_path() -> Option<PathBuf> {
        std::env::var_os(PRESET_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    /// Field value for a category
    pub fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Language => self.language.as_deref(),
            Category::Backend => self.backend.as_deref(),
            Category::Database => self.database.as_deref(),
            Category::Auth => self.auth.as_deref(),
        }
    }

    /// Apply the preset through [`Selection::choose`], in category order
    ///
    /// Every id is validated before anything is written, so an invalid preset
    /// leaves the selection untouched. Returns the auto-filled choices.
    pub fn apply(&self, selection: &mut Selection) -> Result<Vec<Choice>> {
        let choices = Category::ORDERED
            .into_iter()
            .filter_map(|c| self.get(c).map(|id| Choice::parse(c, id)))
            .collect::<Result<Vec<_>>>()?;

        let mut filled = Vec::new();
        for choice in choices {
            filled.extend(selection.apply(choice));
        }
        Ok(filled)
    }

    pub fn role(&self) -> Result<Option<Role>> {
        self.role
            .as_deref()
            .map(|r| {
                r.parse()
                    .map_err(|_| StackError::preset(format!("Unknown role '{}'", r)))
            })
            .transpose()
    }
}
