//! Static project catalog: categories, projects, and the derived views cards render.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is authored by hand in `data/catalog.json`, embedded at compile
//! time, and parsed once into a process-wide table. Components only ever read
//! it; nothing creates, mutates, or deletes entries at runtime.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| match Catalog::from_json(EMBEDDED_CATALOG) {
    Ok(catalog) => catalog,
    Err(e) => {
        log::error!("embedded catalog rejected, rendering without projects: {e}");
        Catalog::default()
    }
});

/// The embedded catalog, loaded on first access.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

// =============================================================================
// ERRORS
// =============================================================================

/// Reasons the catalog source can be rejected.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{kind} id must not be blank")]
    BlankId { kind: &'static str },
    #[error("{kind} `{id}` has a blank title")]
    BlankTitle { kind: &'static str, id: String },
    #[error("duplicate category id `{0}`")]
    DuplicateCategory(String),
    #[error("duplicate project id `{0}`")]
    DuplicateProject(String),
    #[error("project `{0}` has no primary image")]
    MissingImage(String),
}

// =============================================================================
// MODEL
// =============================================================================

/// A named grouping of projects shown in navigation and listings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCategory {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// A single case-study entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// External viewer URL. Absent or blank means the project has no model.
    #[serde(default)]
    pub model_url: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    pub details: ProjectDetails,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub client: String,
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub additional_images: Vec<String>,
}

/// What the back face of a project card shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackFace<'a> {
    /// Synthesized text listing the services, for projects without a model.
    ServiceSummary(String),
    /// External 3D viewer loaded from this URL.
    ModelViewer(&'a str),
}

impl Project {
    /// Usable model URL, if any. Whitespace-only URLs count as absent.
    pub fn model_url(&self) -> Option<&str> {
        self.model_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// `true` when the project has no usable 3D model.
    pub fn is_default_model(&self) -> bool {
        self.model_url().is_none()
    }

    /// Carousel images: the primary image first, then additional images in order.
    pub fn images(&self) -> Vec<&str> {
        std::iter::once(self.image_url.as_str())
            .chain(self.details.additional_images.iter().map(String::as_str))
            .collect()
    }

    pub fn image_count(&self) -> usize {
        1 + self.details.additional_images.len()
    }

    pub fn service_summary(&self) -> String {
        format!(
            "Este proyecto ofrece los siguientes servicios: {}. {}",
            self.services.join(", "),
            self.description
        )
    }

    pub fn back_face(&self) -> BackFace<'_> {
        match self.model_url() {
            Some(url) => BackFace::ModelViewer(url),
            None => BackFace::ServiceSummary(self.service_summary()),
        }
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// Immutable, ordered table of project categories.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<ProjectCategory>,
}

impl Catalog {
    /// Parse and validate a catalog from its JSON source.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the JSON is malformed, an id is blank or
    /// repeated, a title is blank, or a project lacks a primary image.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let categories: Vec<ProjectCategory> = serde_json::from_str(raw)?;
        Self::new(categories)
    }

    /// Build a catalog from already-parsed categories, checking id and image invariants.
    ///
    /// # Errors
    ///
    /// See [`Catalog::from_json`].
    pub fn new(categories: Vec<ProjectCategory>) -> Result<Self, CatalogError> {
        let mut category_ids = HashSet::new();
        let mut project_ids = HashSet::new();

        for category in &categories {
            if category.id.trim().is_empty() {
                return Err(CatalogError::BlankId { kind: "category" });
            }
            if category.title.trim().is_empty() {
                return Err(CatalogError::BlankTitle { kind: "category", id: category.id.clone() });
            }
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }

            for project in &category.projects {
                if project.id.trim().is_empty() {
                    return Err(CatalogError::BlankId { kind: "project" });
                }
                if project.title.trim().is_empty() {
                    return Err(CatalogError::BlankTitle { kind: "project", id: project.id.clone() });
                }
                if !project_ids.insert(project.id.as_str()) {
                    return Err(CatalogError::DuplicateProject(project.id.clone()));
                }
                if project.image_url.trim().is_empty() {
                    return Err(CatalogError::MissingImage(project.id.clone()));
                }
            }
        }

        Ok(Self { categories })
    }

    /// Categories in authored order.
    pub fn categories(&self) -> &[ProjectCategory] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&ProjectCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
