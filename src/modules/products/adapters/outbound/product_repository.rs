// Port for the product record store.
//
// Purpose
// - Describe what the use cases need from storage, without tying them to one implementation.
//
// Responsibilities
// - Return snapshot copies, never references into storage.
// - Report absence as a value (None / false), and a stale expected version as VersionConflict.
// - Reserve DuplicateKey and Backend for conditions the normal flow never produces.

use crate::modules::products::core::product::{Product, ProductFields, ProductId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("version mismatch: expected {expected}, current version is {actual}")]
    VersionConflict { expected: u64, actual: u64 },

    #[error("product {0} already exists")]
    DuplicateKey(ProductId),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Inserts the product with version 1, whatever version the caller supplied.
    async fn add(&self, product: Product) -> Result<Product, RepositoryError>;

    /// `Ok(None)` when no product has this id; nothing is written in that case.
    async fn update(
        &self,
        id: ProductId,
        fields: ProductFields,
        expected_version: u64,
    ) -> Result<Option<Product>, RepositoryError>;

    /// `Ok(false)` when no product has this id.
    async fn delete(&self, id: ProductId, expected_version: u64) -> Result<bool, RepositoryError>;
}
