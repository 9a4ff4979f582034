//! API error type and its [`IntoResponse`] mapping.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use fightguess_core::session::Rejection;
use serde_json::json;
use thiserror::Error;

/// An error produced by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// A guess the game turned down. Mapped to 422 with the tagged reason in
  /// the body so clients can react without parsing the message.
  #[error(transparent)]
  Rejected(#[from] Rejection),
  /// The save store failed underneath us.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Rejected(rejection) => (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
          "error":     rejection.to_string(),
          "rejection": rejection,
        })),
      )
        .into_response(),
      ApiError::Store(error) => {
        tracing::error!("store error: {error}");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "error": "internal error" })),
        )
          .into_response()
      }
    }
  }
}
