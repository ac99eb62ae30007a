//! Storage Substrate
//!
//! The seam the durable storage collaborator plugs into. The store only
//! needs atomic get/put/delete on opaque keys; failures propagate as
//! fatal for the single operation that hit them.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::Result;

// == Storage Trait ==
/// Atomic get/put/delete on opaque keys.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetches the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any prior value.
    async fn put(&self, key: &str, value: Value) -> Result<()>;

    /// Removes the value under `key`; no-op if absent.
    async fn delete(&self, key: &str) -> Result<()>;
}

// == In-Memory Storage ==
/// Default in-process storage substrate.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStorage {
    /// Creates an empty MemoryStorage.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Value) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
