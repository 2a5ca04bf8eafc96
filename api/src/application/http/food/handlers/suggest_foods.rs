use crate::application::http::food::validators::SuggestFoodsParams;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateQuery,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use oxalens_core::domain::food::{
    entities::FoodSuggestion, ports::FoodService, value_objects::SuggestFoodsInput,
};

#[utoipa::path(
    get,
    path = "/suggest",
    tag = "food",
    summary = "Suggest foods",
    description = "Up to five `{id, name}` pairs whose name contains the query. Queries shorter than two characters return an empty list.",
    params(SuggestFoodsParams),
    responses(
        (status = 200, body = Vec<FoodSuggestion>),
        (status = 400, description = "Malformed query string", body = ApiErrorResponse)
    ),
)]
pub async fn suggest_foods(
    State(state): State<AppState>,
    ValidateQuery(params): ValidateQuery<SuggestFoodsParams>,
) -> Result<Response<Vec<FoodSuggestion>>, ApiError> {
    let Some(query) = params.query else {
        return Ok(Response::OK(Vec::new()));
    };

    let suggestions = state
        .service
        .suggest_foods(SuggestFoodsInput { query })
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch food suggestions: {}", e);
            ApiError::InternalServerError("Error fetching food suggestions".to_string())
        })?;

    Ok(Response::OK(suggestions))
}
