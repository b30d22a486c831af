use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::products::adapters::inbound::graphql::{GqlProduct, parse_id, to_graphql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct GetProductQuery;

#[Object]
impl GetProductQuery {
    async fn product(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlProduct>> {
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        let state = context.data_unchecked::<AppState>();
        let view = state.get_product.handle(id).await.map_err(to_graphql_error)?;
        Ok(view.map(Into::into))
    }
}
