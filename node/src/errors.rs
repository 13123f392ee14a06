// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::api::{ErrorResponse, MessageResponse, NOT_FOUND_MESSAGE};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use carros_kernel::error::{KernelError, StorageError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Carro not found")]
    NotFound,
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Invalid body: {0}")]
    InvalidBody(String),
    #[error("Expected request with `Content-Type: application/json`")]
    UnsupportedMediaType,
    #[error(transparent)]
    Rejected(#[from] JsonRejection),
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            EngineError::NotFound => {
                return (StatusCode::NOT_FOUND, Json(MessageResponse::new(NOT_FOUND_MESSAGE))).into_response();
            }
            EngineError::Storage(e) => {
                tracing::error!("Storage failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            EngineError::InvalidBody(msg) => (StatusCode::BAD_REQUEST, msg),
            e @ EngineError::UnsupportedMediaType => (StatusCode::UNSUPPORTED_MEDIA_TYPE, e.to_string()),
            EngineError::Rejected(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<KernelError> for EngineError {
    fn from(e: KernelError) -> Self {
        match e {
            KernelError::NotFound => EngineError::NotFound,
            KernelError::Storage(s) => EngineError::Storage(s),
        }
    }
}
