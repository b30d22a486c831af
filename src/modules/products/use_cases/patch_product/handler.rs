use crate::modules::products::adapters::outbound::product_repository::ProductRepository;
use crate::modules::products::core::product::ProductId;
use crate::modules::products::core::view::ProductView;
use crate::modules::products::use_cases::errors::ApplicationError;
use crate::modules::products::use_cases::patch_product::command::PatchProduct;
use crate::modules::products::use_cases::patch_product::decide::decide_patch;
use std::sync::Arc;
use tracing::{info, warn};

pub struct PatchProductHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> PatchProductHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        id: ProductId,
        command: PatchProduct,
    ) -> Result<Option<ProductView>, ApplicationError> {
        info!(%id, expected_version = command.expected_version, "patching product");
        let decision = decide_patch(command)?;

        let Some(existing) = self.repository.get(id).await? else {
            warn!(%id, "product not found for patch");
            return Ok(None);
        };

        let fields = decision.patch.merge_onto(&existing);
        let updated = self
            .repository
            .update(id, fields, decision.expected_version)
            .await
            .inspect_err(|e| warn!(%id, error = %e, "patch rejected"))?;

        match updated {
            Some(product) => {
                info!(%id, new_version = product.version, "product patched");
                Ok(Some(product.into()))
            }
            None => {
                warn!(%id, "product disappeared before patch");
                Ok(None)
            }
        }
    }
}
