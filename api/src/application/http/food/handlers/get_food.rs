use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State, rejection::PathRejection};
use oxalens_core::domain::food::{
    entities::Food, ports::FoodService, value_objects::GetFoodInput,
};

#[utoipa::path(
    get,
    path = "/{food_id}",
    tag = "food",
    summary = "Get food",
    description = "Retrieves one food by its numeric id.",
    params(
        ("food_id" = i32, Path, description = "Food ID"),
    ),
    responses(
        (status = 200, body = Food),
        (status = 400, description = "Food ID is not an integer", body = ApiErrorResponse),
        (status = 404, description = "Food not found", body = ApiErrorResponse)
    ),
)]
pub async fn get_food(
    food_id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response<Food>, ApiError> {
    let food_id = food_id
        .ok()
        .and_then(|Path(raw)| raw.parse::<i32>().ok())
        .ok_or_else(|| ApiError::BadRequest("Invalid food ID".to_string()))?;

    let food = state
        .service
        .get_food(GetFoodInput { food_id })
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch food {}: {}", food_id, e);
            ApiError::InternalServerError("Error fetching food".to_string())
        })?
        .ok_or_else(|| ApiError::NotFound("Food not found".to_string()))?;

    Ok(Response::OK(food))
}
