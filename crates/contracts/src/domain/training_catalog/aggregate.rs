use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::enums::Modality;

// ============================================================================
// ID Types
// ============================================================================

/// Identifier of a training, unique across the whole catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainingId(pub String);

impl TrainingId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a module (a named group of trainings)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(pub String);

impl ModuleId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A single learning activity in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Training {
    pub id: TrainingId,
    pub title: String,
    pub description: String,
    pub minutes: u32,
    #[serde(default)]
    pub completed: bool,
    pub modality: Modality,
    /// External resource, passed verbatim to the opener
    pub url: String,
    /// Launch is allowed only when set; absent in seed data means false
    #[serde(default)]
    pub enabled: bool,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Named grouping of trainings, e.g. a regulatory topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub name: String,
    /// Display order
    pub trainings: Vec<Training>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("training id '{0}' appears more than once in the catalog")]
    DuplicateTrainingId(String),
}

/// Read-only, ordered collection of modules.
///
/// Only constructed through [`Catalog::new`], which rejects duplicate
/// training ids. There are no mutating operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    modules: Vec<Module>,
}

impl Catalog {
    pub fn new(modules: Vec<Module>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for training in modules.iter().flat_map(|m| m.trainings.iter()) {
            if !seen.insert(training.id.as_str()) {
                return Err(CatalogError::DuplicateTrainingId(
                    training.id.as_str().to_string(),
                ));
            }
        }
        Ok(Self { modules })
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
