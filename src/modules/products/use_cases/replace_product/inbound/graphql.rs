use async_graphql::{Context, ID, Object, Result as GqlResult};
use rust_decimal::Decimal;

use crate::modules::products::adapters::inbound::graphql::{GqlProduct, parse_id, to_graphql_error};
use crate::modules::products::use_cases::replace_product::command::ReplaceProduct;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ReplaceProductMutation;

#[Object]
impl ReplaceProductMutation {
    async fn replace_product(
        &self,
        context: &Context<'_>,
        id: ID,
        name: String,
        price: Decimal,
        quantity: i64,
        version: u64,
    ) -> GqlResult<Option<GqlProduct>> {
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        let state = context.data_unchecked::<AppState>();
        let command = ReplaceProduct {
            name,
            price,
            quantity,
            expected_version: version,
        };
        let view = state
            .replace_product
            .handle(id, command)
            .await
            .map_err(to_graphql_error)?;
        Ok(view.map(Into::into))
    }
}
