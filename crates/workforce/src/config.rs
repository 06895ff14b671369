//! Connection settings for the document store.

use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/";
pub const DEFAULT_DB_NAME: &str = "employee-management";

/// Where the records live: a connection string plus a database name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
}

impl StoreConfig {
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
        }
    }

    /// Reads `MONGO_URI` and `DB_NAME`, falling back to the local defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            uri: lookup("MONGO_URI").unwrap_or_else(|| DEFAULT_MONGO_URI.to_string()),
            database: lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MONGO_URI, DEFAULT_DB_NAME)
    }
}
