use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use oxalens_core::domain::food::{entities::Food, ports::FoodService};

#[utoipa::path(
    get,
    path = "",
    tag = "food",
    summary = "List foods",
    description = "Returns every food in the store.",
    responses(
        (status = 200, body = Vec<Food>)
    ),
)]
pub async fn get_foods(State(state): State<AppState>) -> Result<Response<Vec<Food>>, ApiError> {
    let foods = state.service.get_foods().await.map_err(|e| {
        tracing::error!("Failed to fetch foods: {}", e);
        ApiError::InternalServerError("Error fetching foods".to_string())
    })?;

    Ok(Response::OK(foods))
}
