use crate::modules::products::adapters::outbound::product_repository_in_memory::InMemoryProductRepository;
use crate::modules::products::use_cases::create_product::handler::CreateProductHandler;
use crate::modules::products::use_cases::delete_product::handler::DeleteProductHandler;
use crate::modules::products::use_cases::get_product::handler::GetProductHandler;
use crate::modules::products::use_cases::list_products::handler::ListProductsHandler;
use crate::modules::products::use_cases::patch_product::handler::PatchProductHandler;
use crate::modules::products::use_cases::replace_product::handler::ReplaceProductHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_products: Arc<ListProductsHandler<InMemoryProductRepository>>,
    pub get_product: Arc<GetProductHandler<InMemoryProductRepository>>,
    pub create_product: Arc<CreateProductHandler<InMemoryProductRepository>>,
    pub replace_product: Arc<ReplaceProductHandler<InMemoryProductRepository>>,
    pub patch_product: Arc<PatchProductHandler<InMemoryProductRepository>>,
    pub delete_product: Arc<DeleteProductHandler<InMemoryProductRepository>>,
}

impl AppState {
    /// Every handler shares the one store instance.
    pub fn new(repository: Arc<InMemoryProductRepository>) -> Self {
        Self {
            list_products: Arc::new(ListProductsHandler::new(repository.clone())),
            get_product: Arc::new(GetProductHandler::new(repository.clone())),
            create_product: Arc::new(CreateProductHandler::new(repository.clone())),
            replace_product: Arc::new(ReplaceProductHandler::new(repository.clone())),
            patch_product: Arc::new(PatchProductHandler::new(repository.clone())),
            delete_product: Arc::new(DeleteProductHandler::new(repository)),
        }
    }
}
