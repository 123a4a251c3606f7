use chrono::{Days, NaiveDate, TimeDelta};
use tracing::info;

use beforeyougo_domain::id::{ArticleId, UserId};
use beforeyougo_domain::storage_ref::StorageRef;

use crate::domain::repository::{ArticleRepository, MembershipRepository, StorageRepository};
use crate::domain::types::{Article, DEFAULT_SHELF_LIFE_DAYS, NewArticle, QuantityChange};
use crate::error::PantryServiceError;
use crate::usecase::ownership::OwnershipValidator;

// ── CreateArticle ────────────────────────────────────────────────────────────

pub struct CreateArticleInput {
    pub name: String,
    pub storage: StorageRef,
    pub expiration_date: Option<NaiveDate>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}

pub struct CreateArticleUseCase<S, M, A>
where
    S: StorageRepository,
    M: MembershipRepository,
    A: ArticleRepository,
{
    pub ownership: OwnershipValidator<S, M>,
    pub articles: A,
}

impl<S, M, A> CreateArticleUseCase<S, M, A>
where
    S: StorageRepository,
    M: MembershipRepository,
    A: ArticleRepository,
{
    pub async fn execute(
        &self,
        user_id: UserId,
        input: CreateArticleInput,
        today: NaiveDate,
    ) -> Result<Article, PantryServiceError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(PantryServiceError::MissingData);
        }
        let quantity = input.quantity.unwrap_or(1);
        if quantity < 1 {
            return Err(PantryServiceError::MissingData);
        }
        let storage = self
            .ownership
            .resolve_storage(user_id, &input.storage)
            .await?
            .ok_or(PantryServiceError::InvalidStorage)?;
        let expiration_date = match input.expiration_date {
            Some(date) => date,
            None => today
                .checked_add_days(Days::new(DEFAULT_SHELF_LIFE_DAYS))
                .ok_or(PantryServiceError::MissingData)?,
        };

        let article = self
            .articles
            .create(&NewArticle {
                storage_id: storage.id,
                name: name.to_owned(),
                quantity,
                price: input.price,
                expiration_date,
            })
            .await?;
        info!(
            user_id = %user_id,
            storage_id = %storage.id,
            article_id = %article.id,
            "article created"
        );
        Ok(article)
    }
}

// ── ListArticles (one storage) ───────────────────────────────────────────────

pub struct ListArticlesUseCase<S, M, A>
where
    S: StorageRepository,
    M: MembershipRepository,
    A: ArticleRepository,
{
    pub ownership: OwnershipValidator<S, M>,
    pub articles: A,
}

impl<S, M, A> ListArticlesUseCase<S, M, A>
where
    S: StorageRepository,
    M: MembershipRepository,
    A: ArticleRepository,
{
    pub async fn execute(
        &self,
        user_id: UserId,
        storage_ref: &StorageRef,
    ) -> Result<Vec<Article>, PantryServiceError> {
        let storage = self
            .ownership
            .resolve_storage(user_id, storage_ref)
            .await?
            .ok_or(PantryServiceError::InvalidStorage)?;
        self.articles.list_by_storage(storage.id).await
    }
}

// ── ListInventory (all storages) ─────────────────────────────────────────────

pub struct ListInventoryUseCase<A: ArticleRepository> {
    pub articles: A,
}

impl<A: ArticleRepository> ListInventoryUseCase<A> {
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<Article>, PantryServiceError> {
        self.articles.list_for_user(user_id).await
    }
}

// ── UpdateArticle ────────────────────────────────────────────────────────────

/// Optional overwrites. Empty names, non-positive quantities and zero prices are ignored.
#[derive(Default)]
pub struct UpdateArticleInput {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub storage: Option<StorageRef>,
    pub expiration_date: Option<NaiveDate>,
    pub price: Option<f64>,
}

pub struct UpdateArticleUseCase<S, M, A>
where
    S: StorageRepository,
    M: MembershipRepository,
    A: ArticleRepository,
{
    pub ownership: OwnershipValidator<S, M>,
    pub articles: A,
}

impl<S, M, A> UpdateArticleUseCase<S, M, A>
where
    S: StorageRepository,
    M: MembershipRepository,
    A: ArticleRepository,
{
    pub async fn execute(
        &self,
        user_id: UserId,
        article_id: ArticleId,
        input: UpdateArticleInput,
    ) -> Result<Article, PantryServiceError> {
        let mut article = self
            .ownership
            .resolve_article(&self.articles, user_id, article_id)
            .await?
            .ok_or(PantryServiceError::InvalidArticle)?;

        // Resolve the move target before touching anything else.
        if let Some(storage_ref) = &input.storage {
            let storage = self
                .ownership
                .resolve_storage(user_id, storage_ref)
                .await?
                .ok_or(PantryServiceError::InvalidStorage)?;
            article.storage_id = storage.id;
        }
        if let Some(name) = input.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            article.name = name.to_owned();
        }
        if let Some(quantity) = input.quantity.filter(|q| *q > 0) {
            article.quantity = quantity;
        }
        if let Some(expiration_date) = input.expiration_date {
            article.expiration_date = expiration_date;
        }
        if let Some(price) = input.price.filter(|p| *p != 0.0) {
            article.price = Some(price);
        }

        let article = self.articles.update(&article).await?;
        info!(user_id = %user_id, article_id = %article.id, "article updated");
        Ok(article)
    }
}

// ── DeleteArticle ────────────────────────────────────────────────────────────

pub struct DeleteArticleUseCase<S, M, A>
where
    S: StorageRepository,
    M: MembershipRepository,
    A: ArticleRepository,
{
    pub ownership: OwnershipValidator<S, M>,
    pub articles: A,
}

impl<S, M, A> DeleteArticleUseCase<S, M, A>
where
    S: StorageRepository,
    M: MembershipRepository,
    A: ArticleRepository,
{
    /// Returns the article as it was before deletion.
    pub async fn execute(
        &self,
        user_id: UserId,
        article_id: ArticleId,
    ) -> Result<Article, PantryServiceError> {
        let article = self
            .ownership
            .resolve_article(&self.articles, user_id, article_id)
            .await?
            .ok_or(PantryServiceError::InvalidArticle)?;
        if !self.articles.delete(article.id).await? {
            return Err(PantryServiceError::InvalidArticle);
        }
        info!(user_id = %user_id, article_id = %article.id, "article deleted");
        Ok(article)
    }
}

// ── ReduceQuantity ───────────────────────────────────────────────────────────

pub struct ReduceQuantityUseCase<S, M, A>
where
    S: StorageRepository,
    M: MembershipRepository,
    A: ArticleRepository,
{
    pub ownership: OwnershipValidator<S, M>,
    pub articles: A,
}

impl<S, M, A> ReduceQuantityUseCase<S, M, A>
where
    S: StorageRepository,
    M: MembershipRepository,
    A: ArticleRepository,
{
    pub async fn execute(
        &self,
        user_id: UserId,
        article_id: ArticleId,
    ) -> Result<QuantityChange, PantryServiceError> {
        let article = self
            .ownership
            .resolve_article(&self.articles, user_id, article_id)
            .await?
            .ok_or(PantryServiceError::InvalidArticle)?;
        let change = self
            .articles
            .reduce_quantity(article.id)
            .await?
            .ok_or(PantryServiceError::InvalidArticle)?;
        match &change {
            QuantityChange::Reduced(a) => {
                info!(article_id = %a.id, quantity = a.quantity, "article quantity reduced");
            }
            QuantityChange::Removed(a) => {
                info!(article_id = %a.id, "last unit consumed, article removed");
            }
        }
        Ok(change)
    }
}

// ── SetExpiration ────────────────────────────────────────────────────────────

pub struct SetExpirationUseCase<S, M, A>
where
    S: StorageRepository,
    M: MembershipRepository,
    A: ArticleRepository,
{
    pub ownership: OwnershipValidator<S, M>,
    pub articles: A,
}

impl<S, M, A> SetExpirationUseCase<S, M, A>
where
    S: StorageRepository,
    M: MembershipRepository,
    A: ArticleRepository,
{
    /// Set the expiration date to `today + remaining_days`.
    pub async fn execute(
        &self,
        user_id: UserId,
        article_id: ArticleId,
        remaining_days: i64,
        today: NaiveDate,
    ) -> Result<Article, PantryServiceError> {
        let mut article = self
            .ownership
            .resolve_article(&self.articles, user_id, article_id)
            .await?
            .ok_or(PantryServiceError::InvalidArticle)?;
        article.expiration_date = TimeDelta::try_days(remaining_days)
            .and_then(|delta| today.checked_add_signed(delta))
            .ok_or(PantryServiceError::MissingData)?;
        let article = self.articles.update(&article).await?;
        info!(
            article_id = %article.id,
            expiration_date = %article.expiration_date,
            "article expiration set"
        );
        Ok(article)
    }
}
