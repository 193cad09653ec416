//! Read-only destination catalog
//!
//! Loaded once at startup from the bundled JSON dataset and shared behind an
//! `Arc`. Nothing mutates it afterwards.

use std::path::Path;

use tracing::info;

use crate::models::{Dataset, Destination, Experience};

/// Failure to load the dataset document
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Destinations and experiences available to browse and plan
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dataset: Dataset,
}

impl Catalog {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Parse a dataset document
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Ok(Self::new(dataset))
    }

    /// Read and parse the dataset at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(
            "Loaded dataset from {}: {} destinations, {} experiences",
            path.display(),
            catalog.dataset.destinations.len(),
            catalog.dataset.experiences.len()
        );
        Ok(catalog)
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.dataset.destinations
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.dataset.experiences
    }

    pub fn destination(&self, id: i64) -> Option<&Destination> {
        self.dataset.destinations.iter().find(|d| d.id == id)
    }

    /// Destinations matching the search text and category.
    ///
    /// Blank search text and the `all` category do not filter.
    pub fn search(&self, search: Option<&str>, category: Option<&str>) -> Vec<&Destination> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != "all");

        self.dataset
            .destinations
            .iter()
            .filter(|d| search.map_or(true, |term| d.matches_search(term)))
            .filter(|d| category.map_or(true, |c| d.category == c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"{
        "destinations": [
            {"id": 1, "name": "Rann of Kutch", "location": "Kutch",
             "description": "White salt desert", "category": "natural"},
            {"id": 2, "name": "Dwarkadhish Temple", "location": "Dwarka",
             "description": "Temple on the Gomti", "category": "religious"},
            {"id": 3, "name": "Shivrajpur Beach", "location": "Dwarka",
             "description": "Blue flag beach", "category": "beach"}
        ],
        "experiences": [
            {"id": 1, "name": "Navratri", "category": "Festival",
             "description": "Nine nights of garba", "duration": "9 days",
             "bestTime": "October", "highlights": ["Garba"]}
        ]
    }"#;

    fn names(found: Vec<&Destination>) -> Vec<&str> {
        found.into_iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(DATASET).unwrap();
        assert_eq!(catalog.destinations().len(), 3);
        assert_eq!(catalog.experiences()[0].best_time, "October");
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            Catalog::from_json("{\"destinations\": 3}"),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load("/nonexistent/dataset.json").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/dataset.json"));
    }

    #[test]
    fn test_load_bundled_dataset() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/gujarat-attractions.json");
        let catalog = Catalog::load(path).unwrap();
        assert!(!catalog.destinations().is_empty());

        let gir = catalog.search(Some("gir"), Some("wildlife"));
        assert_eq!(gir.len(), 1);
        assert_eq!(gir[0].transport_options().count(), 1);
    }

    #[test]
    fn test_destination_lookup() {
        let catalog = Catalog::from_json(DATASET).unwrap();
        assert_eq!(catalog.destination(2).unwrap().name, "Dwarkadhish Temple");
        assert!(catalog.destination(99).is_none());
    }

    #[test]
    fn test_search_without_filters_returns_all() {
        let catalog = Catalog::from_json(DATASET).unwrap();
        assert_eq!(catalog.search(None, None).len(), 3);
        assert_eq!(catalog.search(Some("  "), Some("all")).len(), 3);
    }

    #[test]
    fn test_search_by_text() {
        let catalog = Catalog::from_json(DATASET).unwrap();
        assert_eq!(
            names(catalog.search(Some("dwarka"), None)),
            vec!["Dwarkadhish Temple", "Shivrajpur Beach"]
        );
        assert_eq!(names(catalog.search(Some("SALT"), None)), vec!["Rann of Kutch"]);
    }

    #[test]
    fn test_search_by_category_and_text() {
        let catalog = Catalog::from_json(DATASET).unwrap();
        assert_eq!(
            names(catalog.search(Some("dwarka"), Some("beach"))),
            vec!["Shivrajpur Beach"]
        );
        assert!(catalog.search(None, Some("wildlife")).is_empty());
    }
}
