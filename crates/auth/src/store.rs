//! Identity store seam.
//!
//! The real store (database, directory service, ...) lives outside this
//! crate. Lookups may suspend on I/O; the authenticator bounds them with a
//! timeout and never lets a store failure escape.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use thiserror::Error;

use gatekeeper_core::IdentityId;

use crate::IdentityRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("identity store unavailable: {0}")]
    Unavailable(String),

    #[error("identity store error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<IdentityRecord>, StoreError>;

    /// Remove an identity. Returns `false` when no record existed.
    async fn delete(&self, id: &IdentityId) -> Result<bool, StoreError>;
}

#[async_trait]
impl<S> IdentityStore for Arc<S>
where
    S: IdentityStore + ?Sized,
{
    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<IdentityRecord>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn delete(&self, id: &IdentityId) -> Result<bool, StoreError> {
        (**self).delete(id).await
    }
}

/// In-memory identity store for tests/dev.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    inner: RwLock<HashMap<IdentityId, IdentityRecord>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: IdentityRecord) -> Result<(), StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        map.insert(record.id.clone(), record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<IdentityRecord>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(map.get(id).cloned())
    }

    async fn delete(&self, id: &IdentityId) -> Result<bool, StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(map.remove(id).is_some())
    }
}
