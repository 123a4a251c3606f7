use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use beforeyougo_identity::identity::IdentityHeaders;

use crate::domain::types::User;
use crate::error::PantryServiceError;
use crate::state::AppState;
use crate::usecase::user::{
    ActivateUserUseCase, ClearEmailUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
    LoginUseCase, RegisterUserInput, RegisterUserUseCase, UpdateUserInput, UpdateUserUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub is_activated: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.0,
            name: user.name,
            email: user.email,
            is_activated: user.is_activated,
        }
    }
}

/// Public view of another user.
#[derive(Serialize)]
pub struct UserSummaryResponse {
    pub id: i32,
    pub name: String,
}

// ── Request types ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub password: String,
    pub email: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

// ── POST /users ──────────────────────────────────────────────────────────────

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), PantryServiceError> {
    if !state.enable_signup {
        return Err(PantryServiceError::SignupDisabled);
    }
    let uc = RegisterUserUseCase {
        users: state.user_repo(),
        hasher: state.hasher(),
        notifier: state.notifier(),
        require_activation: state.require_activation,
    };
    let user = uc
        .execute(RegisterUserInput {
            name: body.name,
            password: body.password,
            email: body.email,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── POST /users/login ────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<UserResponse>, PantryServiceError> {
    let uc = LoginUseCase {
        users: state.user_repo(),
        registrations: state.registration_repo(),
        hasher: state.hasher(),
        notifier: state.notifier(),
    };
    let user = uc.execute(&body.name, &body.password).await?;
    Ok(Json(user.into()))
}

// ── GET /users/activate/{token} ──────────────────────────────────────────────

pub async fn activate_user(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<StatusCode, PantryServiceError> {
    let uc = ActivateUserUseCase {
        registrations: state.registration_repo(),
    };
    uc.execute(&token).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn list_users(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserSummaryResponse>>, PantryServiceError> {
    let uc = ListUsersUseCase {
        users: state.user_repo(),
    };
    let users = uc.execute().await?;
    let items = users
        .into_iter()
        .map(|u| UserSummaryResponse {
            id: u.id.0,
            name: u.name,
        })
        .collect();
    Ok(Json(items))
}

// ── GET /users/@me ───────────────────────────────────────────────────────────

pub async fn get_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, PantryServiceError> {
    let uc = GetUserUseCase {
        users: state.user_repo(),
    };
    let user = uc.execute(identity.user_id).await?;
    Ok(Json(user.into()))
}

// ── PATCH /users/@me ─────────────────────────────────────────────────────────

pub async fn update_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, PantryServiceError> {
    let uc = UpdateUserUseCase {
        users: state.user_repo(),
        hasher: state.hasher(),
    };
    let user = uc
        .execute(
            identity.user_id,
            UpdateUserInput {
                name: body.name,
                password: body.password,
                email: body.email,
            },
        )
        .await?;
    Ok(Json(user.into()))
}

// ── DELETE /users/@me ────────────────────────────────────────────────────────

pub async fn delete_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<StatusCode, PantryServiceError> {
    let uc = DeleteUserUseCase {
        users: state.user_repo(),
    };
    uc.execute(identity.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /users/@me/email ──────────────────────────────────────────────────

pub async fn clear_email(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, PantryServiceError> {
    let uc = ClearEmailUseCase {
        users: state.user_repo(),
    };
    let user = uc.execute(identity.user_id).await?;
    Ok(Json(user.into()))
}
