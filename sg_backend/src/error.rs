use crate::providers::error::ErrorProvider;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sg_core::server::payload::error_response::ErrorResponse;
use sg_core::types::generation_kind::GenerationKind;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, ErrorBackend>;
pub type ResultAPI = std::result::Result<Response, ErrorBackend>;

#[derive(Debug, Error)]
pub enum ErrorBackend {
    #[error("{0}")]
    Validation(String),

    #[error("{kind} generation failed")]
    Generation {
        kind: GenerationKind,
        #[source]
        source: ErrorProvider,
    },

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Invalid request body: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

impl ErrorBackend {
    pub fn generation(kind: GenerationKind) -> impl FnOnce(ErrorProvider) -> ErrorBackend {
        move |source| ErrorBackend::Generation { kind, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorBackend::Validation(_) => StatusCode::BAD_REQUEST,
            ErrorBackend::JsonRejection(_) => StatusCode::BAD_REQUEST,
            ErrorBackend::Generation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBackend::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBackend::HttpClient(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBackend::IO(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            ErrorBackend::Generation { source, .. } => ErrorResponse::new(self.to_string())
                .with_details(source.to_string())
                .with_raw(source.raw().map(str::to_string)),
            ErrorBackend::Validation(_) | ErrorBackend::JsonRejection(_) => {
                ErrorResponse::new(self.to_string())
            }
            _ => ErrorResponse::new("An unexpected error occurred").with_details(self.to_string()),
        }
    }
}

impl IntoResponse for ErrorBackend {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ErrorBackend::Generation { source, .. } => error!("{self}: {source}"),
            _ => error!("ErrorBackend occurred: {self}"),
        }
        (status, Json(self.to_error_response())).into_response()
    }
}
