use crate::modules::products::adapters::outbound::product_repository::ProductRepository;
use crate::modules::products::core::product::ProductId;
use crate::modules::products::core::view::ProductView;
use crate::modules::products::use_cases::errors::ApplicationError;
use crate::modules::products::use_cases::replace_product::command::ReplaceProduct;
use crate::modules::products::use_cases::replace_product::decide::decide_replace;
use std::sync::Arc;
use tracing::{info, warn};

pub struct ReplaceProductHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ReplaceProductHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// `Ok(None)` when the product does not exist. A stale version is `ApplicationError::Conflict`.
    pub async fn handle(
        &self,
        id: ProductId,
        command: ReplaceProduct,
    ) -> Result<Option<ProductView>, ApplicationError> {
        info!(%id, expected_version = command.expected_version, "replacing product");
        let decision = decide_replace(command)?;

        if self.repository.get(id).await?.is_none() {
            warn!(%id, "product not found for replace");
            return Ok(None);
        }

        let updated = self
            .repository
            .update(id, decision.fields, decision.expected_version)
            .await
            .inspect_err(|e| warn!(%id, error = %e, "replace rejected"))?;

        match updated {
            Some(product) => {
                info!(%id, new_version = product.version, "product replaced");
                Ok(Some(product.into()))
            }
            None => {
                warn!(%id, "product disappeared before replace");
                Ok(None)
            }
        }
    }
}
