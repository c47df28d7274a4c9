use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    NotFound(&'static str),
    Validation(String),
    Internal(&'static str),
    /// Bulk import failure; the underlying error text is returned as-is.
    SampleData(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) | AppError::SampleData(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> &str {
        match self {
            AppError::NotFound(msg) | AppError::Internal(msg) => *msg,
            AppError::Validation(msg) | AppError::SampleData(msg) => msg.as_str(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

pub trait ResultExt<T> {
    /// Log the error and map it to a 500 with a fixed message.
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T> ResultExt<T> for color_eyre::Result<T> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e:?}");
            AppError::Internal(message)
        })
    }
}
