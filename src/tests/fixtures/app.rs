use crate::modules::products::adapters::outbound::product_repository::ProductRepository;
use crate::modules::products::adapters::outbound::product_repository_in_memory::InMemoryProductRepository;
use crate::modules::products::core::product::Product;
use crate::shell::state::AppState;
use axum::{body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use std::sync::Arc;

pub fn app_state() -> (Arc<InMemoryProductRepository>, AppState) {
    let repository = Arc::new(InMemoryProductRepository::new());
    (repository.clone(), AppState::new(repository))
}

pub fn offline_app_state() -> AppState {
    let mut repository = InMemoryProductRepository::new();
    repository.toggle_offline();
    AppState::new(Arc::new(repository))
}

pub async fn seed(repository: &InMemoryProductRepository, products: Vec<Product>) {
    for product in products {
        repository.add(product).await.unwrap();
    }
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
