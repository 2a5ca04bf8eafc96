use super::handlers::get_food::{__path_get_food, get_food};
use super::handlers::get_foods::{__path_get_foods, get_foods};
use super::handlers::search_foods::{__path_search_foods, search_foods};
use super::handlers::suggest_foods::{__path_suggest_foods, suggest_foods};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_foods, get_food, search_foods, suggest_foods))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/foods", state.args.server.root_path),
            get(get_foods),
        )
        .route(
            &format!("{}/api/foods/search", state.args.server.root_path),
            get(search_foods),
        )
        .route(
            &format!("{}/api/foods/suggest", state.args.server.root_path),
            get(suggest_foods),
        )
        .route(
            &format!("{}/api/foods/{{food_id}}", state.args.server.root_path),
            get(get_food),
        )
}
