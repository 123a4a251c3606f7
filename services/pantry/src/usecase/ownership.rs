//! Access checks for storages and articles.
//!
//! Access is re-derived from the membership relation on every call. "Does not exist" and
//! "not yours" both come back as `None` so callers cannot probe for foreign resources.

use beforeyougo_domain::id::{ArticleId, UserId};
use beforeyougo_domain::storage_ref::StorageRef;

use crate::domain::repository::{ArticleRepository, MembershipRepository, StorageRepository};
use crate::domain::types::{Article, Storage};
use crate::error::PantryServiceError;

pub struct OwnershipValidator<S: StorageRepository, M: MembershipRepository> {
    pub storages: S,
    pub memberships: M,
}

impl<S: StorageRepository, M: MembershipRepository> OwnershipValidator<S, M> {
    /// By id: membership first, then the storage row. By name: candidate storages first,
    /// then the first one the user is a member of.
    pub async fn resolve_storage(
        &self,
        user_id: UserId,
        storage_ref: &StorageRef,
    ) -> Result<Option<Storage>, PantryServiceError> {
        match storage_ref {
            StorageRef::ById(id) => {
                if !self.memberships.is_member(user_id, *id).await? {
                    return Ok(None);
                }
                self.storages.find_by_id(*id).await
            }
            StorageRef::ByName(name) => {
                for storage in self.storages.find_by_name(name).await? {
                    if self.memberships.is_member(user_id, storage.id).await? {
                        return Ok(Some(storage));
                    }
                }
                Ok(None)
            }
        }
    }

    /// The article, if it exists and its storage resolves for `user_id`.
    pub async fn resolve_article<A: ArticleRepository>(
        &self,
        articles: &A,
        user_id: UserId,
        article_id: ArticleId,
    ) -> Result<Option<Article>, PantryServiceError> {
        let Some(article) = articles.find_by_id(article_id).await? else {
            return Ok(None);
        };
        let storage_ref = StorageRef::ById(article.storage_id);
        Ok(self
            .resolve_storage(user_id, &storage_ref)
            .await?
            .map(|_| article))
    }
}
