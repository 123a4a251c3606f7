use axum::http::StatusCode;

/// Liveness probe for `GET /healthz`.
///
/// Readiness depends on each service's backing stores, so `/readyz` lives in the service.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
