use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Dashboard service error variants.
///
/// Deliberately small: degraded upstream reads are absorbed into
/// zero/empty metrics by the usecases rather than surfaced here.
#[derive(Debug, thiserror::Error)]
pub enum DashboardServiceError {
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl DashboardServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for DashboardServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
