use crate::modules::products::adapters::outbound::product_repository::ProductRepository;
use crate::modules::products::core::view::ProductView;
use crate::modules::products::use_cases::errors::ApplicationError;
use crate::modules::products::use_cases::list_products::decide::decide_query;
use crate::modules::products::use_cases::list_products::pipeline::run_query;
use crate::modules::products::use_cases::list_products::query::ListProducts;
use crate::shared::core::paging::PagedResult;
use std::sync::Arc;
use tracing::info;

pub struct ListProductsHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ListProductsHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        params: ListProducts,
    ) -> Result<PagedResult<ProductView>, ApplicationError> {
        info!(
            page = ?params.page,
            page_size = ?params.page_size,
            search = ?params.search,
            sort_by = ?params.sort_by,
            sort_direction = ?params.sort_direction,
            "listing products"
        );
        let query = decide_query(params)?;
        let snapshot = self.repository.list_all().await?;
        Ok(run_query(snapshot, &query))
    }
}
