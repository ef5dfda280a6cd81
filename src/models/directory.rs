//! Single-slot model directory cache.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::ModelDirectory;
use crate::error::Result;
use crate::types::{Credential, CredentialFingerprint};

/// Lists the models a credential can use.
#[async_trait]
pub trait ModelLister: Send + Sync {
    async fn list_models(&self, credential: &Credential) -> Result<ModelDirectory>;
}

/// Memoizes the model directory for the most recently used credential.
///
/// Capacity is one entry. A successful fetch for a different credential
/// replaces the slot wholesale; failed fetches are never stored, so the
/// next call retries the listing. The slot lock is held across the fetch,
/// which serializes concurrent lookups.
pub struct ModelDirectoryCache {
    lister: Arc<dyn ModelLister>,
    slot: Mutex<Option<CachedDirectory>>,
}

struct CachedDirectory {
    key: CredentialFingerprint,
    directory: Arc<ModelDirectory>,
}

impl ModelDirectoryCache {
    pub fn new(lister: Arc<dyn ModelLister>) -> Self {
        Self {
            lister,
            slot: Mutex::new(None),
        }
    }

    /// Return the directory for `credential`, listing it on a miss.
    pub async fn fetch(&self, credential: &Credential) -> Result<Arc<ModelDirectory>> {
        let key = credential.fingerprint();
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref().filter(|cached| cached.key == key) {
            debug!(models = cached.directory.len(), "model directory cache hit");
            return Ok(Arc::clone(&cached.directory));
        }

        debug!("model directory cache miss; listing models");
        let directory = Arc::new(self.lister.list_models(credential).await?);
        *slot = Some(CachedDirectory {
            key,
            directory: Arc::clone(&directory),
        });
        Ok(directory)
    }

    /// Whether the slot currently holds `credential`'s directory.
    pub async fn is_cached(&self, credential: &Credential) -> bool {
        let key = credential.fingerprint();
        self.slot
            .lock()
            .await
            .as_ref()
            .is_some_and(|cached| cached.key == key)
    }

    pub async fn clear(&self) {
        *self.slot.lock().await = None;
    }
}
