use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::products::adapters::inbound::graphql::{parse_id, to_graphql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteProductMutation;

#[Object]
impl DeleteProductMutation {
    /// False when no product has this id.
    async fn delete_product(&self, context: &Context<'_>, id: ID, version: u64) -> GqlResult<bool> {
        let Some(id) = parse_id(&id) else {
            return Ok(false);
        };
        let state = context.data_unchecked::<AppState>();
        state
            .delete_product
            .handle(id, version)
            .await
            .map_err(to_graphql_error)
    }
}
