pub mod app;
pub mod commands {
    pub mod create_product;
    pub mod patch_product;
    pub mod replace_product;
}
pub mod products;
