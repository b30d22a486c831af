use async_graphql::{Context, Object, Result as GqlResult};
use rust_decimal::Decimal;

use crate::modules::products::adapters::inbound::graphql::{GqlProduct, to_graphql_error};
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateProductMutation;

#[Object]
impl CreateProductMutation {
    async fn create_product(
        &self,
        context: &Context<'_>,
        name: String,
        price: Decimal,
        quantity: i64,
    ) -> GqlResult<GqlProduct> {
        let state = context.data_unchecked::<AppState>();
        let command = CreateProduct {
            name,
            price,
            quantity,
        };
        state
            .create_product
            .handle(command)
            .await
            .map(Into::into)
            .map_err(to_graphql_error)
    }
}
