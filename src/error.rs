use std::path::PathBuf;

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreError {
    #[error("paste directory {} does not exist", .dir.display())]
    DirectoryMissing { dir: PathBuf },
    #[error("paste {name} already exists")]
    AlreadyExists { name: String },
    #[error("paste {name} not found")]
    NotFound { name: String },
    #[error("invalid paste name {name:?}")]
    InvalidName { name: String },
    #[error("failed to write paste")]
    Write { source: std::io::Error },
    #[error("failed to read paste")]
    Read { source: std::io::Error },
    #[error("failed to encode paste")]
    Serialize { source: serde_json::Error },
    #[error("malformed paste record")]
    Deserialize { source: serde_json::Error },
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    #[error("error reading multipart data")]
    Multipart {
        #[from]
        source: MultipartError,
    },
    #[error("storage error")]
    Store {
        #[from]
        source: StoreError,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, body) = match &self {
            ApiError::Store {
                source: StoreError::NotFound { .. },
            } => (StatusCode::NOT_FOUND, "not found".to_owned()),
            ApiError::Multipart { .. } => (StatusCode::BAD_REQUEST, format!("{self}")),
            // the cause of a server error stays in the log
            ApiError::Store { source } => {
                error!("storage error: {source:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };

        (status_code, body).into_response()
    }
}
