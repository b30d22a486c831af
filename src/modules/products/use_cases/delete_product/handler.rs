use crate::modules::products::adapters::outbound::product_repository::ProductRepository;
use crate::modules::products::core::product::ProductId;
use crate::modules::products::core::rules::validate_expected_version;
use crate::modules::products::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::{info, warn};

pub struct DeleteProductHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> DeleteProductHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// `Ok(false)` when there was nothing to delete.
    pub async fn handle(
        &self,
        id: ProductId,
        expected_version: u64,
    ) -> Result<bool, ApplicationError> {
        info!(%id, expected_version, "deleting product");
        let expected_version = validate_expected_version(expected_version)?;

        if self.repository.get(id).await?.is_none() {
            warn!(%id, "product not found for delete");
            return Ok(false);
        }

        let deleted = self
            .repository
            .delete(id, expected_version)
            .await
            .inspect_err(|e| warn!(%id, error = %e, "delete rejected"))?;
        if deleted {
            info!(%id, "product deleted");
        }
        Ok(deleted)
    }
}
