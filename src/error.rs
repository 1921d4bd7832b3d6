//! Error handling for the application

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::booking::responses::ErrorResponse;
use crate::booking::BookingError;
use crate::config::ConfigError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("Invalid JSON body: {0}")]
    JsonBody(#[from] JsonRejection),

    #[error("Invalid query string: {0}")]
    QueryString(#[from] QueryRejection),

    #[error("Invalid path: {0}")]
    PathParams(#[from] PathRejection),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Seed data error: {0}")]
    Seed(String),
}

impl AppError {
    fn error_type(&self) -> &'static str {
        match self {
            AppError::Booking(e) => e.error_type(),
            AppError::JsonBody(_) => "invalid_body",
            AppError::QueryString(_) => "invalid_query",
            AppError::PathParams(_) => "invalid_path",
            AppError::Database(_) => "database",
            AppError::Template(_) => "template",
            AppError::Config(_) => "configuration",
            AppError::Seed(_) => "seed",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Booking(e) => (e.status_code(), e.to_string()),
            AppError::JsonBody(rejection) => (rejection.status(), rejection.body_text()),
            AppError::QueryString(rejection) => (rejection.status(), rejection.body_text()),
            AppError::PathParams(rejection) => (rejection.status(), rejection.body_text()),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error".to_string())
            }
            AppError::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error".to_string())
            }
            AppError::Seed(msg) => {
                tracing::error!("Seed data error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        let body = ErrorResponse {
            error_type: self.error_type().to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
