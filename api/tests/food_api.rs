use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use oxalens_api::{
    application::http::server::{
        api_entities::api_error::ApiErrorResponse,
        http_server::{router, state},
    },
    args::{Args, LlmArgs, LlmProviderArg, LogArgs, ServerArgs},
};
use oxalens_core::domain::food::entities::{Food, FoodSuggestion, OxalateLevel};
use serde_json::Value;
use test_context::{AsyncTestContext, test_context};

fn test_args(root_path: &str) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: root_path.to_string(),
            allowed_origins: vec!["http://localhost:5000".to_string()],
        },
        llm: LlmArgs {
            provider: LlmProviderArg::Openai,
            api_key: None,
            model: None,
            max_tokens: 150,
            timeout_secs: 1,
        },
        log: LogArgs {
            filter: "warn".to_string(),
            json: false,
        },
    }
}

async fn server_for(args: Args) -> TestServer {
    let state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

struct FoodApiContext {
    server: TestServer,
}

impl AsyncTestContext for FoodApiContext {
    async fn setup() -> FoodApiContext {
        FoodApiContext {
            server: server_for(test_args("")).await,
        }
    }
}

#[test_context(FoodApiContext)]
#[tokio::test]
async fn test_list_foods(ctx: &mut FoodApiContext) {
    let response = ctx.server.get("/api/foods").await;
    response.assert_status_ok();

    let foods = response.json::<Vec<Food>>();
    assert!(!foods.is_empty());
    assert_eq!(foods[0].id, 1);
    assert!(foods.iter().all(|f| f.description.is_some()));
}

#[test_context(FoodApiContext)]
#[tokio::test]
async fn test_food_json_uses_camel_case(ctx: &mut FoodApiContext) {
    let body = ctx.server.get("/api/foods/1").await.json::<Value>();

    for field in [
        "id",
        "name",
        "category",
        "oxalateContent",
        "oxalateLevel",
        "servingSize",
        "alternativeTip",
        "description",
    ] {
        assert!(body.get(field).is_some(), "missing field {field}");
    }
}

#[test_context(FoodApiContext)]
#[tokio::test]
async fn test_get_food_by_id(ctx: &mut FoodApiContext) {
    let response = ctx.server.get("/api/foods/1").await;
    response.assert_status_ok();

    let food = response.json::<Food>();
    assert_eq!(food.id, 1);
    assert_eq!(food.name, "Spinach");
    assert_eq!(
        food.description.as_deref(),
        Some("Spinach is a Vegetables with high oxalate content (970mg per 100g).")
    );
}

#[test_context(FoodApiContext)]
#[tokio::test]
async fn test_get_food_with_non_numeric_id(ctx: &mut FoodApiContext) {
    let response = ctx.server.get("/api/foods/abc").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<ApiErrorResponse>();
    assert_eq!(body.message, "Invalid food ID");
}

#[test_context(FoodApiContext)]
#[tokio::test]
async fn test_get_food_with_undecodable_id(ctx: &mut FoodApiContext) {
    let response = ctx.server.get("/api/foods/%FF").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<ApiErrorResponse>();
    assert_eq!(body.message, "Invalid food ID");
}

#[test_context(FoodApiContext)]
#[tokio::test]
async fn test_get_unknown_food(ctx: &mut FoodApiContext) {
    let response = ctx.server.get("/api/foods/9999").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body = response.json::<ApiErrorResponse>();
    assert_eq!(body.message, "Food not found");
}

#[test_context(FoodApiContext)]
#[tokio::test]
async fn test_search_is_case_insensitive(ctx: &mut FoodApiContext) {
    for query in ["spin", "SPINACH", "nach"] {
        let response = ctx
            .server
            .get("/api/foods/search")
            .add_query_param("query", query)
            .await;
        response.assert_status_ok();

        let foods = response.json::<Vec<Food>>();
        assert!(
            foods.iter().any(|f| f.name == "Spinach"),
            "query {query} should find Spinach"
        );
    }
}

#[test_context(FoodApiContext)]
#[tokio::test]
async fn test_search_with_level_filter(ctx: &mut FoodApiContext) {
    let all = ctx
        .server
        .get("/api/foods/search")
        .add_query_param("query", "s")
        .add_query_param("filter", "all")
        .await
        .json::<Vec<Food>>();
    let low = ctx
        .server
        .get("/api/foods/search")
        .add_query_param("query", "s")
        .add_query_param("filter", "low")
        .await
        .json::<Vec<Food>>();

    assert!(!low.is_empty());
    assert!(low.len() < all.len());
    assert!(low.iter().all(|f| f.oxalate_level == OxalateLevel::Low));
    assert!(low.iter().all(|f| all.contains(f)));
}

#[test_context(FoodApiContext)]
#[tokio::test]
async fn test_search_without_query(ctx: &mut FoodApiContext) {
    let missing = ctx.server.get("/api/foods/search").await;
    assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
    let body = missing.json::<ApiErrorResponse>();
    assert!(body.errors.is_some());

    let empty = ctx
        .server
        .get("/api/foods/search")
        .add_query_param("query", "")
        .await;
    assert_eq!(empty.status_code(), StatusCode::BAD_REQUEST);
}

#[test_context(FoodApiContext)]
#[tokio::test]
async fn test_search_with_invalid_filter(ctx: &mut FoodApiContext) {
    let response = ctx
        .server
        .get("/api/foods/search")
        .add_query_param("query", "kale")
        .add_query_param("filter", "extreme")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<ApiErrorResponse>();
    let errors = body.errors.unwrap();
    assert!(errors.get("filter").is_some());
}

#[test_context(FoodApiContext)]
#[tokio::test]
async fn test_suggest(ctx: &mut FoodApiContext) {
    let short = ctx
        .server
        .get("/api/foods/suggest")
        .add_query_param("query", "s")
        .await
        .json::<Vec<FoodSuggestion>>();
    assert!(short.is_empty());

    let response = ctx
        .server
        .get("/api/foods/suggest")
        .add_query_param("query", "sp")
        .await;
    response.assert_status_ok();

    let raw = response.json::<Vec<Value>>();
    assert_eq!(raw.len(), 5);
    for entry in &raw {
        let object = entry.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("id"));
        assert!(object.contains_key("name"));
    }
}

#[test_context(FoodApiContext)]
#[tokio::test]
async fn test_suggest_without_query(ctx: &mut FoodApiContext) {
    let response = ctx.server.get("/api/foods/suggest").await;
    response.assert_status_ok();
    assert!(response.json::<Vec<FoodSuggestion>>().is_empty());
}

#[test_context(FoodApiContext)]
#[tokio::test]
async fn test_health_and_docs(ctx: &mut FoodApiContext) {
    let health = ctx.server.get("/health").await.json::<Value>();
    assert_eq!(health["status"], "UP");
    assert!(health["foods"].as_u64().unwrap() > 0);

    let docs = ctx.server.get("/api-docs/openapi.json").await;
    docs.assert_status_ok();
    let docs = docs.json::<Value>();
    assert!(docs["paths"].get("/api/foods/search").is_some());

    let page = ctx.server.get("/").await;
    page.assert_status_ok();
    let page = page.text();
    assert!(page.contains("OxaLens"));
    assert!(page.contains("About Oxalates"));
    assert!(page.contains("not a substitute for medical advice"));
}

#[tokio::test]
async fn test_routes_honor_root_path() {
    let server = server_for(test_args("/oxalens")).await;

    server.get("/oxalens/api/foods").await.assert_status_ok();
    server.get("/oxalens/health").await.assert_status_ok();
    assert_eq!(
        server.get("/api/foods").await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[test_context(FoodApiContext)]
#[tokio::test]
async fn test_suggest_with_repeated_query_uses_error_body(ctx: &mut FoodApiContext) {
    let response = ctx.server.get("/api/foods/suggest?query=sp&query=ka").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<ApiErrorResponse>();
    assert!(!body.message.is_empty());
}
