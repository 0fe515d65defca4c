//! Career catalog: the static set of career definitions the matcher scores against.
//!
//! Loaded once at startup (built-in data, or a JSON file named by
//! `CAREER_CATALOG_PATH`) and shared read-only as `Arc<Catalog>`.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// A single career the matcher can recommend.
///
/// `title`, `description`, `average_salary` and `growth_rate` are display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub interests: Vec<String>,
    pub education_level: Vec<String>,
    pub average_salary: String,
    pub growth_rate: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("career catalog is empty")]
    Empty,

    #[error("career at position {0} has an empty id")]
    MissingId(usize),

    #[error("duplicate career id '{0}'")]
    DuplicateId(String),
}

/// Immutable, validated, ordered list of career definitions.
#[derive(Debug, Clone)]
pub struct Catalog {
    careers: Vec<CareerDefinition>,
}

impl Catalog {
    /// Validates and freezes a catalog. Keyword lists are lower-cased so the
    /// matcher compares them against lower-cased profile text.
    pub fn new(careers: Vec<CareerDefinition>) -> Result<Self, CatalogError> {
        if careers.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(careers.len());
        let mut normalized = Vec::with_capacity(careers.len());

        for (position, mut career) in careers.into_iter().enumerate() {
            if career.id.trim().is_empty() {
                return Err(CatalogError::MissingId(position));
            }
            if !seen.insert(career.id.clone()) {
                return Err(CatalogError::DuplicateId(career.id));
            }
            if career.required_skills.is_empty() {
                warn!("Career '{}' has no required skills; skill sub-score will be 0", career.id);
            }
            if career.interests.is_empty() {
                warn!("Career '{}' has no interests; interest sub-score will be 0", career.id);
            }

            lowercase_all(&mut career.required_skills);
            lowercase_all(&mut career.interests);
            lowercase_all(&mut career.education_level);
            normalized.push(career);
        }

        Ok(Self { careers: normalized })
    }

    /// The catalog shipped with the service.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin::careers())
    }

    /// Loads a catalog from a JSON array of career definitions.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read career catalog {}", path.display()))?;
        let careers: Vec<CareerDefinition> = serde_json::from_str(&raw)
            .with_context(|| format!("Career catalog {} is not valid JSON", path.display()))?;
        let catalog = Self::new(careers)
            .with_context(|| format!("Career catalog {} failed validation", path.display()))?;
        info!("Loaded {} careers from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Resolves the startup catalog: file override if configured, built-in otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::builtin()?),
        }
    }

    pub fn careers(&self) -> &[CareerDefinition] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }
}

fn lowercase_all(values: &mut [String]) {
    for value in values.iter_mut() {
        *value = value.to_lowercase();
    }
}
