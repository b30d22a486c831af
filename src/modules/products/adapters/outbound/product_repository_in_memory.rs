// In memory implementation of the ProductRepository port.
//
// Purpose
// - Hold the live product collection for the lifetime of the process.
//
// Responsibilities
// - Serialize every operation behind one mutex so check-then-write sequences are atomic.
// - Enforce optimistic concurrency by comparing the expected version with the stored one.
// - Hand out clones only.

use crate::modules::products::adapters::outbound::product_repository::{
    ProductRepository, RepositoryError,
};
use crate::modules::products::core::product::{INITIAL_VERSION, Product, ProductFields, ProductId};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<BTreeMap<ProductId, Product>>,
    is_offline: bool,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend(
                "Product repository offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.products.lock().await.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.products.lock().await.values().cloned().collect())
    }

    async fn add(&self, mut product: Product) -> Result<Product, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.products.lock().await;
        match guard.entry(product.id) {
            Entry::Occupied(_) => Err(RepositoryError::DuplicateKey(product.id)),
            Entry::Vacant(slot) => {
                product.version = INITIAL_VERSION;
                Ok(slot.insert(product).clone())
            }
        }
    }

    async fn update(
        &self,
        id: ProductId,
        fields: ProductFields,
        expected_version: u64,
    ) -> Result<Option<Product>, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.products.lock().await;
        let Some(existing) = guard.get_mut(&id) else {
            return Ok(None);
        };
        if existing.version != expected_version {
            return Err(RepositoryError::VersionConflict {
                expected: expected_version,
                actual: existing.version,
            });
        }
        existing.apply(fields);
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: ProductId, expected_version: u64) -> Result<bool, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.products.lock().await;
        let Some(existing) = guard.get(&id) else {
            return Ok(false);
        };
        if existing.version != expected_version {
            return Err(RepositoryError::VersionConflict {
                expected: expected_version,
                actual: existing.version,
            });
        }
        guard.remove(&id);
        Ok(true)
    }
}
