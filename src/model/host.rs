//! ModelHost — owns the loaded model and hands out query snapshots.
//!
//! The `ModelHost` owns all mutable state and provides `ModelQuery`
//! snapshots for reading. This pattern ensures consistent reads across
//! multiple queries over one loaded model.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = ModelHost::new();
//! host.load_file("app-dna.json")?;
//!
//! let query = host.query();
//! let result = find_references(&query, "Customer");
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::error::ModelError;
use super::query::ModelQuery;
use super::types::RootModel;

/// Location of a data object inside the model tree: (namespace, object).
pub(crate) type ObjectPath = (usize, usize);

/// Owns the loaded model and an insertion-ordered index of its objects.
///
/// Load a model via `load_file()`, `load_str()`, or `set_model()`, then
/// get a read-only snapshot via `query()`. A host with nothing loaded
/// still answers queries, as an empty model.
#[derive(Debug, Default)]
pub struct ModelHost {
    model: Option<RootModel>,
    file_path: Option<PathBuf>,
    /// Object name → position, in model order. Model order is the
    /// determinism guarantee for enumeration.
    object_index: IndexMap<String, ObjectPath>,
}

impl ModelHost {
    /// Create a host with no model loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a model from a JSON file on disk.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let model: RootModel = serde_json::from_str(&content)
            .map_err(|e| ModelError::json(format!("{}: {}", path.display(), e)))?;
        self.install(model)?;
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Load a model from a JSON string.
    pub fn load_str(&mut self, json: &str) -> Result<(), ModelError> {
        let model: RootModel =
            serde_json::from_str(json).map_err(|e| ModelError::json(e.to_string()))?;
        self.install(model)?;
        self.file_path = None;
        Ok(())
    }

    /// Install an already-built model.
    pub fn set_model(&mut self, model: RootModel) -> Result<(), ModelError> {
        self.install(model)?;
        self.file_path = None;
        Ok(())
    }

    /// Drop the loaded model.
    pub fn clear(&mut self) {
        self.model = None;
        self.file_path = None;
        self.object_index.clear();
    }

    /// Whether a model is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// The loaded model, if any.
    pub fn current_model(&self) -> Option<&RootModel> {
        self.model.as_ref()
    }

    /// The file the model was loaded from, when it came from disk.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Number of named data objects in the loaded model.
    pub fn object_count(&self) -> usize {
        self.object_index.len()
    }

    /// Get a read-only snapshot for querying.
    pub fn query(&self) -> ModelQuery<'_> {
        ModelQuery::new(self.model.as_ref(), &self.object_index)
    }

    fn install(&mut self, model: RootModel) -> Result<(), ModelError> {
        let index = build_object_index(&model)?;
        debug!(
            namespaces = model.namespace.len(),
            objects = index.len(),
            "model installed"
        );
        self.model = Some(model);
        self.object_index = index;
        Ok(())
    }
}

/// Index every named data object by name, in model order.
///
/// Object names are unique within the model; a duplicate is a validation
/// failure. An object with no name cannot be a reference target and is
/// left out of the index (it is still enumerated by scans).
fn build_object_index(model: &RootModel) -> Result<IndexMap<String, ObjectPath>, ModelError> {
    let mut index = IndexMap::new();

    for (ns_idx, namespace) in model.namespace.iter().enumerate() {
        let Some(objects) = namespace.object.as_slice() else {
            warn!(
                namespace = namespace.name.as_deref().unwrap_or("(unnamed)"),
                "object collection is not a list; skipping namespace contents"
            );
            continue;
        };
        for (obj_idx, object) in objects.iter().enumerate() {
            let Some(name) = object.name.as_deref().filter(|n| !n.is_empty()) else {
                warn!(namespace = ns_idx, index = obj_idx, "data object has no name");
                continue;
            };
            if index
                .insert(name.to_string(), (ns_idx, obj_idx))
                .is_some()
            {
                return Err(ModelError::validation(format!(
                    "duplicate data object name: {name}"
                )));
            }
        }
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_host_answers_queries() {
        let host = ModelHost::new();
        assert!(!host.is_loaded());
        assert_eq!(host.object_count(), 0);
        assert_eq!(host.query().all_objects().count(), 0);
    }

    #[test]
    fn test_load_str_indexes_objects() {
        let mut host = ModelHost::new();
        host.load_str(
            r#"{"namespace": [{"name": "App", "object": [
                {"name": "Customer"}, {"name": "Invoice"}
            ]}]}"#,
        )
        .unwrap();

        assert!(host.is_loaded());
        assert_eq!(host.object_count(), 2);
        let query = host.query();
        assert!(query.object_by_name("Customer").is_some());
        assert!(query.object_by_name("customer").is_none()); // case-sensitive
    }

    #[test]
    fn test_duplicate_object_name_rejected() {
        let mut host = ModelHost::new();
        let err = host
            .load_str(r#"{"namespace": [{"object": [{"name": "A"}, {"name": "A"}]}]}"#)
            .unwrap_err();
        assert!(matches!(err, ModelError::Validation(_)));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut host = ModelHost::new();
        assert!(matches!(
            host.load_str("not json"),
            Err(ModelError::Json(_))
        ));
        assert!(!host.is_loaded());
    }

    #[test]
    fn test_clear_unloads() {
        let mut host = ModelHost::new();
        host.load_str(r#"{"namespace": []}"#).unwrap();
        assert!(host.is_loaded());
        host.clear();
        assert!(!host.is_loaded());
        assert_eq!(host.object_count(), 0);
    }
}
