use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use oxalens_core::domain::food::ports::FoodService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub foods: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Health check",
    description = "Reports liveness and the number of foods loaded.",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn get_health(
    State(state): State<AppState>,
) -> Result<Response<HealthResponse>, ApiError> {
    let foods = state.service.get_foods().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        status: "UP".to_string(),
        foods: foods.len(),
    }))
}
