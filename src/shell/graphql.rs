use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::products::use_cases::create_product::inbound::graphql::CreateProductMutation;
use crate::modules::products::use_cases::delete_product::inbound::graphql::DeleteProductMutation;
use crate::modules::products::use_cases::get_product::inbound::graphql::GetProductQuery;
use crate::modules::products::use_cases::list_products::inbound::graphql::ListProductsQuery;
use crate::modules::products::use_cases::patch_product::inbound::graphql::PatchProductMutation;
use crate::modules::products::use_cases::replace_product::inbound::graphql::ReplaceProductMutation;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListProductsQuery, GetProductQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CreateProductMutation,
    ReplaceProductMutation,
    PatchProductMutation,
    DeleteProductMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
