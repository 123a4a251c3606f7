#![allow(async_fn_in_trait)]

use beforeyougo_domain::id::{ArticleId, StorageId, UserId};

use crate::domain::types::{
    Article, NewArticle, NewUser, ProductInfo, QuantityChange, Storage, User, UserRegistration,
};
use crate::error::PantryServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, PantryServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, PantryServiceError>;
    /// `UserAlreadyExists` when the name is taken.
    async fn create(&self, user: &NewUser) -> Result<User, PantryServiceError>;

    /// Insert the user together with its pending activation token in one transaction.
    /// `UserAlreadyExists` when the name is taken.
    async fn create_with_registration(
        &self,
        user: &NewUser,
        token: &str,
    ) -> Result<User, PantryServiceError>;

    /// Persist name, password hash, email and activation flag. `InvalidUser` if the row is
    /// gone, `UserAlreadyExists` if the new name is taken.
    async fn update(&self, user: &User) -> Result<User, PantryServiceError>;

    /// Returns `true` if a row was deleted. Memberships and registrations go with it, and
    /// so does every storage (with its articles) the user was the last member of.
    async fn delete(&self, id: UserId) -> Result<bool, PantryServiceError>;

    /// Activated users ordered by name.
    async fn list_activated(&self) -> Result<Vec<User>, PantryServiceError>;
}

/// Repository for pending activation tokens.
pub trait RegistrationRepository: Send + Sync {
    async fn find_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<UserRegistration>, PantryServiceError>;

    /// Delete the token and activate its user atomically. `None` for unknown tokens.
    async fn consume(&self, token: &str) -> Result<Option<UserId>, PantryServiceError>;
}

/// Repository for storages.
pub trait StorageRepository: Send + Sync {
    async fn find_by_id(&self, id: StorageId) -> Result<Option<Storage>, PantryServiceError>;

    /// Storage names are not unique across users; every match is returned, oldest first.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Storage>, PantryServiceError>;

    /// Storages the user is a member of, ordered by id.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Storage>, PantryServiceError>;

    /// Insert the storage and the creator's membership in one transaction.
    async fn create_with_member(
        &self,
        name: &str,
        user_id: UserId,
    ) -> Result<Storage, PantryServiceError>;

    /// `InvalidStorage` if the row is gone.
    async fn rename(&self, id: StorageId, name: &str) -> Result<Storage, PantryServiceError>;

    /// Delete the storage and all its memberships unless it still holds articles.
    /// Returns `false` (and changes nothing) when articles remain.
    async fn delete_if_empty(&self, id: StorageId) -> Result<bool, PantryServiceError>;
}

/// Repository for the user/storage membership relation.
pub trait MembershipRepository: Send + Sync {
    async fn is_member(
        &self,
        user_id: UserId,
        storage_id: StorageId,
    ) -> Result<bool, PantryServiceError>;
}

/// Repository for articles.
pub trait ArticleRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, PantryServiceError>;

    /// Articles of one storage, soonest expiration first (ties by id).
    async fn list_by_storage(
        &self,
        storage_id: StorageId,
    ) -> Result<Vec<Article>, PantryServiceError>;

    /// Articles across every storage the user is a member of, soonest expiration first.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Article>, PantryServiceError>;

    async fn create(&self, article: &NewArticle) -> Result<Article, PantryServiceError>;

    /// Persist every mutable field of `article`. `InvalidArticle` if the row is gone.
    async fn update(&self, article: &Article) -> Result<Article, PantryServiceError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: ArticleId) -> Result<bool, PantryServiceError>;

    /// Decrement by one, deleting the article instead of storing a quantity below 1.
    /// `None` if the article no longer exists.
    async fn reduce_quantity(
        &self,
        id: ArticleId,
    ) -> Result<Option<QuantityChange>, PantryServiceError>;
}

/// Append-only memo of barcode display strings.
pub trait BarcodeCacheRepository: Send + Sync {
    async fn get(&self, barcode: &str) -> Result<Option<String>, PantryServiceError>;

    /// First writer wins: inserting an existing barcode is a silent no-op.
    async fn insert_if_absent(&self, barcode: &str, data: &str) -> Result<(), PantryServiceError>;
}

/// External product database keyed by barcode.
pub trait ProductLookupPort: Send + Sync {
    /// `Ok(None)` when the provider does not know the barcode.
    async fn fetch(&self, barcode: &str) -> anyhow::Result<Option<ProductInfo>>;
}

/// One-way password hashing.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, PantryServiceError>;
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Delivers activation links to newly registered users.
pub trait RegistrationNotifier: Send + Sync {
    async fn send_activation(&self, user: &User, token: &str) -> Result<(), PantryServiceError>;
}
