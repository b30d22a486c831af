use crate::modules::products::adapters::outbound::product_repository::ProductRepository;
use crate::modules::products::core::product::ProductId;
use crate::modules::products::core::view::ProductView;
use crate::modules::products::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::{info, warn};

pub struct GetProductHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> GetProductHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// `Ok(None)` is the normal outcome for an unknown id.
    pub async fn handle(&self, id: ProductId) -> Result<Option<ProductView>, ApplicationError> {
        info!(%id, "fetching product");
        let product = self.repository.get(id).await?;
        if product.is_none() {
            warn!(%id, "product not found");
        }
        Ok(product.map(ProductView::from))
    }
}
