use crate::modules::products::adapters::outbound::product_repository::ProductRepository;
use crate::modules::products::core::product::{Product, ProductId};
use crate::modules::products::core::view::ProductView;
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use crate::modules::products::use_cases::create_product::decide::decide_create;
use crate::modules::products::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::info;

pub struct CreateProductHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> CreateProductHandler<TRepository>
where
    TRepository: ProductRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: CreateProduct) -> Result<ProductView, ApplicationError> {
        info!(product_name = %command.name, "creating product");
        let fields = decide_create(command)?;
        let created = self
            .repository
            .add(Product::new(ProductId::generate(), fields))
            .await?;
        info!(id = %created.id, "product created");
        Ok(created.into())
    }
}
