use tracing::info;

use beforeyougo_domain::id::{StorageId, UserId};
use beforeyougo_domain::storage_ref::StorageRef;

use crate::domain::repository::{MembershipRepository, StorageRepository};
use crate::domain::types::Storage;
use crate::error::PantryServiceError;
use crate::usecase::ownership::OwnershipValidator;

fn storage_name(name: &str) -> Result<&str, PantryServiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PantryServiceError::MissingData);
    }
    Ok(name)
}

// ── CreateStorage ────────────────────────────────────────────────────────────

pub struct CreateStorageUseCase<S: StorageRepository> {
    pub storages: S,
}

impl<S: StorageRepository> CreateStorageUseCase<S> {
    /// The creator becomes the first member in the same transaction.
    pub async fn execute(&self, user_id: UserId, name: &str) -> Result<Storage, PantryServiceError> {
        let storage = self
            .storages
            .create_with_member(storage_name(name)?, user_id)
            .await?;
        info!(user_id = %user_id, storage_id = %storage.id, "storage created");
        Ok(storage)
    }
}

// ── ListStorages ─────────────────────────────────────────────────────────────

pub struct ListStoragesUseCase<S: StorageRepository> {
    pub storages: S,
}

impl<S: StorageRepository> ListStoragesUseCase<S> {
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<Storage>, PantryServiceError> {
        self.storages.list_for_user(user_id).await
    }
}

// ── UpdateStorage ────────────────────────────────────────────────────────────

pub struct UpdateStorageUseCase<S: StorageRepository, M: MembershipRepository> {
    pub ownership: OwnershipValidator<S, M>,
}

impl<S: StorageRepository, M: MembershipRepository> UpdateStorageUseCase<S, M> {
    pub async fn execute(
        &self,
        user_id: UserId,
        storage_id: StorageId,
        name: &str,
    ) -> Result<Storage, PantryServiceError> {
        let storage = self
            .ownership
            .resolve_storage(user_id, &StorageRef::ById(storage_id))
            .await?
            .ok_or(PantryServiceError::InvalidStorage)?;
        let storage = self
            .ownership
            .storages
            .rename(storage.id, storage_name(name)?)
            .await?;
        info!(user_id = %user_id, storage_id = %storage.id, "storage renamed");
        Ok(storage)
    }
}

// ── DeleteStorage ────────────────────────────────────────────────────────────

pub struct DeleteStorageUseCase<S: StorageRepository, M: MembershipRepository> {
    pub ownership: OwnershipValidator<S, M>,
}

impl<S: StorageRepository, M: MembershipRepository> DeleteStorageUseCase<S, M> {
    /// Refuses with `NonEmptyStorage` while articles remain. Returns the deleted storage.
    pub async fn execute(
        &self,
        user_id: UserId,
        storage_id: StorageId,
    ) -> Result<Storage, PantryServiceError> {
        let storage = self
            .ownership
            .resolve_storage(user_id, &StorageRef::ById(storage_id))
            .await?
            .ok_or(PantryServiceError::InvalidStorage)?;
        if !self.ownership.storages.delete_if_empty(storage.id).await? {
            return Err(PantryServiceError::NonEmptyStorage);
        }
        info!(user_id = %user_id, storage_id = %storage.id, "storage deleted");
        Ok(storage)
    }
}
