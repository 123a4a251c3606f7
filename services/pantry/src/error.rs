use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Pantry service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum PantryServiceError {
    #[error("invalid storage")]
    InvalidStorage,
    #[error("invalid article")]
    InvalidArticle,
    #[error("invalid user")]
    InvalidUser,
    #[error("storage is not empty")]
    NonEmptyStorage,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("invalid name")]
    InvalidName,
    #[error("missing data")]
    MissingData,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("user not activated")]
    UserNotActivated,
    #[error("invalid token")]
    InvalidToken,
    #[error("signup disabled")]
    SignupDisabled,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl PantryServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidStorage => "INVALID_STORAGE",
            Self::InvalidArticle => "INVALID_ARTICLE",
            Self::InvalidUser => "INVALID_USER",
            Self::NonEmptyStorage => "NON_EMPTY_STORAGE",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::InvalidName => "INVALID_NAME",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UserNotActivated => "USER_NOT_ACTIVATED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::SignupDisabled => "SIGNUP_DISABLED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for PantryServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidStorage | Self::InvalidArticle | Self::InvalidUser | Self::InvalidToken => {
                StatusCode::NOT_FOUND
            }
            Self::NonEmptyStorage | Self::UserAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidName | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::UserNotActivated => StatusCode::UNAUTHORIZED,
            Self::SignupDisabled => StatusCode::FORBIDDEN,
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
