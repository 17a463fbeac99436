//! Directory of stores a visitor can pick a venue from.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Single store entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub store_id: String,
    pub address: String,
}

/// Stores in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreDirectory {
    stores: Vec<Store>,
}

impl StoreDirectory {
    pub fn new(stores: Vec<Store>) -> Self {
        Self { stores }
    }

    /// Decode a directory from a JSON array of stores.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Stores whose address contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Store> {
        let needle = query.to_lowercase();
        self.stores
            .iter()
            .filter(|store| store.address.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Load a store directory from a JSON file.
pub fn load_store_directory(path: &Path) -> Result<StoreDirectory> {
    let file = File::open(path)?;
    StoreDirectory::from_reader(BufReader::new(file))
}
