use crate::application::http::server::app_state::AppState;

use axum::{Router, response::Html, routing::get};

const INDEX_HTML: &str = include_str!("../../../../assets/index.html");

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Serves the search page at the root path.
pub fn web_routes(state: AppState) -> Router<AppState> {
    Router::new().route(&format!("{}/", state.args.server.root_path), get(index))
}
