use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::products::core::product::ProductId;
use crate::modules::products::use_cases::replace_product::command::ReplaceProduct;
use crate::shell::errors::{ApiError, TraceId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceProductBody {
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
    #[serde(alias = "expectedVersion")]
    pub version: u64,
}

pub async fn handle(
    State(state): State<AppState>,
    trace_id: TraceId,
    id: Result<Path<ProductId>, PathRejection>,
    body: Result<Json<ReplaceProductBody>, JsonRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return ApiError::not_found(trace_id).into_response();
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return ApiError::bad_request(trace_id, rejection.body_text()).into_response();
        }
    };

    let command = ReplaceProduct {
        name: body.name,
        price: body.price,
        quantity: body.quantity,
        expected_version: body.version,
    };

    match state.replace_product.handle(id, command).await {
        Ok(Some(view)) => Json(view).into_response(),
        Ok(None) => ApiError::not_found(trace_id).into_response(),
        Err(error) => ApiError::from_application(trace_id, error).into_response(),
    }
}
