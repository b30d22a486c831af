use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::products::use_cases::create_product::command::CreateProduct;
use crate::shell::errors::{ApiError, TraceId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductBody {
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    trace_id: TraceId,
    body: Result<Json<CreateProductBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return ApiError::bad_request(trace_id, rejection.body_text()).into_response();
        }
    };

    let command = CreateProduct {
        name: body.name,
        price: body.price,
        quantity: body.quantity,
    };

    match state.create_product.handle(command).await {
        Ok(view) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/api/v1/products/{}", view.id))],
            Json(view),
        )
            .into_response(),
        Err(error) => ApiError::from_application(trace_id, error).into_response(),
    }
}
