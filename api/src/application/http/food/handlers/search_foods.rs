use crate::application::http::food::validators::SearchFoodsParams;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateQuery,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use oxalens_core::domain::food::{entities::Food, ports::FoodService};

#[utoipa::path(
    get,
    path = "/search",
    tag = "food",
    summary = "Search foods",
    description = "Case-insensitive substring search on food names, optionally restricted to one oxalate level.",
    params(SearchFoodsParams),
    responses(
        (status = 200, body = Vec<Food>),
        (status = 400, description = "Invalid search parameters", body = ApiErrorResponse)
    ),
)]
pub async fn search_foods(
    State(state): State<AppState>,
    ValidateQuery(params): ValidateQuery<SearchFoodsParams>,
) -> Result<Response<Vec<Food>>, ApiError> {
    let search = params.to_search_query().map_err(ApiError::from)?;

    let foods = state.service.search_foods(search).await.map_err(|e| {
        tracing::error!("Failed to search foods: {}", e);
        ApiError::InternalServerError("Error searching foods".to_string())
    })?;

    Ok(Response::OK(foods))
}
