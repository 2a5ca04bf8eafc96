use crate::application::http::{food::router::FoodApiDoc, health::router::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "OxaLens API"
    ),
    nest(
        (path = "/api/foods", api = FoodApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
