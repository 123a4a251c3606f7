use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use beforeyougo_domain::id::StorageId;
use beforeyougo_identity::identity::IdentityHeaders;

use crate::domain::types::Storage;
use crate::error::PantryServiceError;
use crate::state::AppState;
use crate::usecase::storage::{
    CreateStorageUseCase, DeleteStorageUseCase, ListStoragesUseCase, UpdateStorageUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StorageResponse {
    pub id: i32,
    pub name: String,
}

impl From<Storage> for StorageResponse {
    fn from(storage: Storage) -> Self {
        Self {
            id: storage.id.0,
            name: storage.name,
        }
    }
}

#[derive(Deserialize)]
pub struct StorageNameRequest {
    pub name: String,
}

// ── GET /storages ────────────────────────────────────────────────────────────

pub async fn list_storages(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<StorageResponse>>, PantryServiceError> {
    let uc = ListStoragesUseCase {
        storages: state.storage_repo(),
    };
    let storages = uc.execute(identity.user_id).await?;
    Ok(Json(storages.into_iter().map(StorageResponse::from).collect()))
}

// ── POST /storages ───────────────────────────────────────────────────────────

pub async fn create_storage(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<StorageNameRequest>,
) -> Result<(StatusCode, Json<StorageResponse>), PantryServiceError> {
    let uc = CreateStorageUseCase {
        storages: state.storage_repo(),
    };
    let storage = uc.execute(identity.user_id, &body.name).await?;
    Ok((StatusCode::CREATED, Json(storage.into())))
}

// ── PATCH /storages/{storage} ────────────────────────────────────────────────

pub async fn update_storage(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(storage_id): Path<i32>,
    Json(body): Json<StorageNameRequest>,
) -> Result<Json<StorageResponse>, PantryServiceError> {
    let uc = UpdateStorageUseCase {
        ownership: state.ownership(),
    };
    let storage = uc
        .execute(identity.user_id, StorageId(storage_id), &body.name)
        .await?;
    Ok(Json(storage.into()))
}

// ── DELETE /storages/{storage} ───────────────────────────────────────────────

pub async fn delete_storage(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(storage_id): Path<i32>,
) -> Result<Json<StorageResponse>, PantryServiceError> {
    let uc = DeleteStorageUseCase {
        ownership: state.ownership(),
    };
    let storage = uc.execute(identity.user_id, StorageId(storage_id)).await?;
    Ok(Json(storage.into()))
}
