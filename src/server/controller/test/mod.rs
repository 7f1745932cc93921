
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::{
    model::{api::ErrorDto, game::GameDto},
    server::{router::router, state::AppState},
};

/// Builds the full router over a fresh in-memory database with the games table.
async fn test_app() -> (Router, DatabaseConnection) {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.unwrap();

    (router(AppState::new(db.clone()), false), db)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn read_game(response: Response) -> GameDto {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

async fn read_error(response: Response) -> ErrorDto {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
