use async_graphql::{Context, ID, Object, Result as GqlResult};
use rust_decimal::Decimal;

use crate::modules::products::adapters::inbound::graphql::{GqlProduct, parse_id, to_graphql_error};
use crate::modules::products::use_cases::patch_product::command::PatchProduct;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct PatchProductMutation;

#[Object]
impl PatchProductMutation {
    async fn patch_product(
        &self,
        context: &Context<'_>,
        id: ID,
        name: Option<String>,
        price: Option<Decimal>,
        quantity: Option<i64>,
        version: u64,
    ) -> GqlResult<Option<GqlProduct>> {
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        let state = context.data_unchecked::<AppState>();
        let command = PatchProduct {
            name,
            price,
            quantity,
            expected_version: version,
        };
        let view = state
            .patch_product
            .handle(id, command)
            .await
            .map_err(to_graphql_error)?;
        Ok(view.map(Into::into))
    }
}
