use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use numclass_core::classify::{InvalidNumberBody, ParseNumberError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid number {raw:?}: {source}")]
    InvalidNumber {
        raw: Option<String>,
        #[source]
        source: ParseNumberError,
    },

    /// Only reached when the blocking classification task fails to join
    #[error("Classification failed: {0}")]
    Classification(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidNumber { raw, .. } => {
                (StatusCode::BAD_REQUEST, Json(InvalidNumberBody::new(raw))).into_response()
            }
            Error::Classification(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": true, "message": message })),
            )
                .into_response(),
        }
    }
}
