use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::{MealTemplate, MealType};

const BUILTIN_MEALS: &str = include_str!("../../data/meal_templates.json");

#[derive(Debug, Serialize, Deserialize)]
struct MealCatalogFile {
    templates: Vec<MealTemplate>,
}

/// Immutable set of meal templates grouped by meal type.
///
/// Template order within a bucket is preserved from the source file; the
/// first template of each bucket is the dietary fallback.
#[derive(Debug, Clone)]
pub struct MealCatalog {
    templates: Vec<MealTemplate>,
}

impl MealCatalog {
    /// Build a catalog, rejecting empty buckets and non-positive calories.
    pub fn new(templates: Vec<MealTemplate>) -> Result<Self> {
        if let Some(bad) = templates.iter().find(|t| !t.is_valid()) {
            return Err(PlannerError::Catalog(format!(
                "template '{}' has invalid nutrition values",
                bad.name
            )));
        }

        for meal_type in MealType::ALL {
            if !templates.iter().any(|t| t.category == meal_type) {
                return Err(PlannerError::Catalog(format!(
                    "no templates for meal type '{}'",
                    meal_type
                )));
            }
        }

        Ok(Self { templates })
    }

    /// The reference catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_MEALS)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: MealCatalogFile = serde_json::from_str(json)?;
        Self::new(file.templates)
    }

    /// Load a catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&content)?;
        debug!(
            path = %path.as_ref().display(),
            templates = catalog.len(),
            "loaded meal catalog"
        );
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise the embedded catalog.
    pub fn load_or_builtin<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }

    /// Templates of one meal type, in catalog order.
    pub fn bucket(&self, meal_type: MealType) -> Vec<&MealTemplate> {
        self.templates
            .iter()
            .filter(|t| t.category == meal_type)
            .collect()
    }

    pub fn templates(&self) -> &[MealTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
