/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse`, so handlers return
 * `Result<_, BackendError>` and the status and body follow from the variant.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Post not found",
 *   "status": 404
 * }
 * ```
 *
 * Internal errors are logged here with their full detail; the client only
 * ever sees the generic message.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
