// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use carros_kernel::storage::{Fields, Record};
use carros_kernel::types::id::RecordId;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::api::*;
use crate::engine::Engine;
use crate::errors::EngineError;

/// The engine behind one lock: each request runs load-mutate-save alone.
pub type SharedEngine = Arc<Mutex<Engine>>;

pub fn build_router(state: SharedEngine) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/carros", get(list_carros).post(create_carro))
        .route("/carros/", get(list_carros).post(create_carro))
        .route(
            "/carros/:id",
            get(get_carro).put(update_carro).delete(delete_carro),
        )
        .route(
            "/carros/:id/",
            get(get_carro).put(update_carro).delete(delete_carro),
        )
        // Observability
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn count(op: &'static str) {
    metrics::counter!("carros_requests_total", 1, "op" => op);
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    match essence.split_once('/') {
        Some((kind, subtype)) => kind == "application" && (subtype == "json" || subtype.ends_with("+json")),
        None => false,
    }
}

/// Request bodies must be a JSON object; its keys become record fields.
///
/// An empty body with a JSON content type counts as `{}`.
fn into_fields(headers: &HeaderMap, body: Bytes) -> Result<Fields, EngineError> {
    if !is_json_content_type(headers) {
        return Err(EngineError::UnsupportedMediaType);
    }
    if body.is_empty() {
        return Ok(Fields::new());
    }
    let Json(value) = Json::<Value>::from_bytes(&body)?;
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(EngineError::InvalidBody(format!(
            "expected a JSON object, got {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

async fn welcome() -> &'static str {
    count("welcome");
    WELCOME_TEXT
}

async fn list_carros(State(state): State<SharedEngine>) -> Result<Json<Vec<Record>>, EngineError> {
    count("list");
    let engine = state.lock().await;
    Ok(Json(engine.list()?))
}

/// Unknown ids answer 200 with an empty JSON body, not 404.
async fn get_carro(
    State(state): State<SharedEngine>,
    Path(id): Path<String>,
) -> Result<Response, EngineError> {
    count("get");
    let engine = state.lock().await;
    match engine.get(RecordId::parse(&id))? {
        Some(carro) => Ok(Json(carro).into_response()),
        None => Ok((StatusCode::OK, [(CONTENT_TYPE, "application/json")], "").into_response()),
    }
}

async fn create_carro(
    State(state): State<SharedEngine>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Record>, EngineError> {
    count("create");
    let fields = into_fields(&headers, body)?;
    let engine = state.lock().await;
    Ok(Json(engine.create(fields)?))
}

async fn update_carro(
    State(state): State<SharedEngine>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MessageResponse>, EngineError> {
    count("update");
    let fields = into_fields(&headers, body)?;
    let engine = state.lock().await;
    engine.update(RecordId::parse(&id), fields)?;
    Ok(Json(MessageResponse::new(UPDATED_MESSAGE)))
}

async fn delete_carro(
    State(state): State<SharedEngine>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, EngineError> {
    count("delete");
    let engine = state.lock().await;
    engine.delete(RecordId::parse(&id))?;
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}

async fn metrics_handler() -> String {
    crate::telemetry::get_metrics()
}
