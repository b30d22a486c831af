use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::products::adapters::inbound::graphql::{GqlProductPage, to_graphql_error};
use crate::modules::products::use_cases::list_products::query::ListProducts;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListProductsQuery;

#[Object]
impl ListProductsQuery {
    async fn products(
        &self,
        context: &Context<'_>,
        page: Option<u32>,
        page_size: Option<u32>,
        search: Option<String>,
        sort_by: Option<String>,
        sort_direction: Option<String>,
    ) -> GqlResult<GqlProductPage> {
        let state = context.data_unchecked::<AppState>();
        let params = ListProducts {
            page,
            page_size,
            search,
            sort_by,
            sort_direction,
        };
        state
            .list_products
            .handle(params)
            .await
            .map(Into::into)
            .map_err(to_graphql_error)
    }
}
