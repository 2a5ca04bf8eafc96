use std::sync::Arc;

use crate::application::http::food::router::food_routes;
use crate::application::http::health::router::health_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::application::http::web::router::web_routes;
use crate::args::Args;

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::{Json, Router, routing::get};
use oxalens_core::{application::create_service, domain::common::OxaLensConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

/// Builds the application state. The food store is fully seeded on return.
pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = OxaLensConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid allowed origin {origin}: {e}");
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, ACCEPT]);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);
    let openapi_json = openapi.clone();

    let router = axum::Router::new()
        .merge(Scalar::with_url(format!("{}/scalar", root_path), openapi))
        .route(
            &api_docs_url,
            get(move || async move { Json(openapi_json) }),
        )
        .merge(food_routes(state.clone()))
        .merge(health_routes(state.clone()))
        .merge(web_routes(state.clone()))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
