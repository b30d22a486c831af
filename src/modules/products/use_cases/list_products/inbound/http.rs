use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::products::use_cases::list_products::query::ListProducts;
use crate::shell::errors::{ApiError, TraceId};
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
}

impl From<ListProductsParams> for ListProducts {
    fn from(params: ListProductsParams) -> Self {
        Self {
            page: params.page,
            page_size: params.page_size,
            search: params.search,
            sort_by: params.sort_by,
            sort_direction: params.sort_direction,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    trace_id: TraceId,
    params: Result<Query<ListProductsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => {
            return ApiError::bad_request(trace_id, rejection.body_text()).into_response();
        }
    };

    match state.list_products.handle(params.into()).await {
        Ok(page) => Json(page).into_response(),
        Err(error) => ApiError::from_application(trace_id, error).into_response(),
    }
}
