// GraphQL output types and error mapping shared by the product resolvers.
//
// Responsibilities
// - Present ProductView and PagedResult in GraphQL form.
// - Turn ApplicationError into a GraphQL error carrying a `code` extension.

use async_graphql::{Error, ErrorExtensions, ID, SimpleObject};
use rust_decimal::Decimal;
use tracing::{error, warn};

use crate::modules::products::core::product::ProductId;
use crate::modules::products::core::view::ProductView;
use crate::modules::products::use_cases::errors::ApplicationError;
use crate::shared::core::paging::PagedResult;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Product")]
pub struct GqlProduct {
    pub id: ID,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub version: u64,
}

impl From<ProductView> for GqlProduct {
    fn from(v: ProductView) -> Self {
        Self {
            id: ID(v.id.to_string()),
            name: v.name,
            price: v.price,
            quantity: v.quantity,
            version: v.version,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "ProductPage")]
pub struct GqlProductPage {
    pub items: Vec<GqlProduct>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

impl From<PagedResult<ProductView>> for GqlProductPage {
    fn from(v: PagedResult<ProductView>) -> Self {
        Self {
            items: v.items.into_iter().map(Into::into).collect(),
            page: v.page,
            page_size: v.page_size,
            total_items: v.total_items,
            total_pages: v.total_pages,
        }
    }
}

/// None for an id that is not a UUID; such an id names no product.
pub fn parse_id(id: &ID) -> Option<ProductId> {
    id.parse().ok()
}

pub fn to_graphql_error(error: ApplicationError) -> Error {
    match error {
        ApplicationError::Invalid(reason) => {
            warn!(error = %reason, "invalid graphql input");
            Error::new(reason.to_string()).extend_with(|_, e| e.set("code", "BAD_REQUEST"))
        }
        ApplicationError::Conflict { current_version } => {
            warn!(current_version, "concurrency conflict");
            Error::new(format!(
                "Version mismatch. Current version is {current_version}."
            ))
            .extend_with(|_, e| {
                e.set("code", "CONFLICT");
                e.set("currentVersion", current_version);
            })
        }
        ApplicationError::Repository(source) => {
            error!(error = %source, "unhandled failure");
            Error::new("An internal server error occurred")
                .extend_with(|_, e| e.set("code", "INTERNAL"))
        }
    }
}
