//! HTTP Response Mapping
//!
//! Turns an [`AppError`](super::app_error::AppError) into the JSON error
//! envelope. Compiled only with the `axum` feature so the kernel itself
//! stays framework-free.

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Clients get the envelope and nothing else; the source stays
        // server-side.
        let body = serde_json::json!({
            "success": false,
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use crate::error::app_error::AppError;
    use axum::response::IntoResponse;

    #[test]
    fn response_status_follows_the_kind() {
        assert_eq!(
            AppError::not_found("User not found")
                .into_response()
                .status()
                .as_u16(),
            404
        );
        assert_eq!(
            AppError::internal("boom").into_response().status().as_u16(),
            500
        );
    }
}
