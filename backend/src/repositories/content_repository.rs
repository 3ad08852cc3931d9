use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("content file is not a JSON object of collections: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("collection {0} is not a list of items")]
    NotACollection(String),
    #[error("unknown collection {0}")]
    UnknownCollection(String),
}

/// Read-only collections of content items, keyed by collection name.
/// Loaded once at start-up and shared between requests.
#[derive(Debug, Default)]
pub struct ContentRepository {
    collections: HashMap<String, Vec<Value>>,
}

impl ContentRepository {
    pub fn new(collections: HashMap<String, Vec<Value>>) -> Self {
        Self { collections }
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ContentError> {
        let document: HashMap<String, Value> = serde_json::from_str(raw)?;
        let mut collections = HashMap::with_capacity(document.len());
        for (name, value) in document {
            match value {
                Value::Array(items) => {
                    collections.insert(name, items);
                }
                _ => return Err(ContentError::NotACollection(name)),
            }
        }
        Ok(Self::new(collections))
    }

    /// Every item of a collection, in stored order.
    pub fn get_all(&self, collection: &str) -> Result<&[Value], ContentError> {
        self.collections
            .get(collection)
            .map(Vec::as_slice)
            .ok_or_else(|| ContentError::UnknownCollection(collection.to_string()))
    }

    pub fn collection_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.collections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn item_count(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }
}
