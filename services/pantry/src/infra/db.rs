use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set, Unchanged},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel as _, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionError, TransactionTrait,
    sea_query::{Expr, OnConflict, Query},
};

use beforeyougo_domain::id::{ArticleId, StorageId, UserId};
use beforeyougo_pantry_schema::{
    articles, barcode_cache, storages, user_registrations, user_storages, users,
};

use crate::domain::repository::{
    ArticleRepository, BarcodeCacheRepository, MembershipRepository, RegistrationRepository,
    StorageRepository, UserRepository,
};
use crate::domain::types::{
    Article, NewArticle, NewUser, QuantityChange, Storage, User, UserRegistration,
};
use crate::error::PantryServiceError;

/// `SELECT storage_id FROM user_storages WHERE user_id = ?`
fn member_storage_ids(user_id: UserId) -> sea_orm::sea_query::SelectStatement {
    Query::select()
        .column(user_storages::Column::StorageId)
        .from(user_storages::Entity)
        .and_where(user_storages::Column::UserId.eq(user_id.0))
        .to_owned()
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

fn new_user_model(user: &NewUser) -> users::ActiveModel {
    users::ActiveModel {
        id: NotSet,
        name: Set(user.name.clone()),
        password_hash: Set(user.password_hash.clone()),
        email: Set(user.email.clone()),
        is_activated: Set(user.is_activated),
    }
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, PantryServiceError> {
        let model = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, PantryServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find user by name")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<User, PantryServiceError> {
        match new_user_model(user).insert(&self.db).await {
            Ok(model) => Ok(user_from_model(model)),
            Err(e) if is_unique_violation(&e) => Err(PantryServiceError::UserAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }

    async fn create_with_registration(
        &self,
        user: &NewUser,
        token: &str,
    ) -> Result<User, PantryServiceError> {
        let active = new_user_model(user);
        let token = token.to_owned();
        let result = self
            .db
            .transaction::<_, users::Model, DbErr>(|txn| {
                Box::pin(async move {
                    let user = active.insert(txn).await?;
                    user_registrations::ActiveModel {
                        id: NotSet,
                        token: Set(token),
                        user_id: Set(user.id),
                    }
                    .insert(txn)
                    .await?;
                    Ok(user)
                })
            })
            .await;
        match result {
            Ok(model) => Ok(user_from_model(model)),
            Err(TransactionError::Transaction(e)) if is_unique_violation(&e) => {
                Err(PantryServiceError::UserAlreadyExists)
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context("create user with registration")
                .into()),
        }
    }

    async fn update(&self, user: &User) -> Result<User, PantryServiceError> {
        let result = users::ActiveModel {
            id: Unchanged(user.id.0),
            name: Set(user.name.clone()),
            password_hash: Set(user.password_hash.clone()),
            email: Set(user.email.clone()),
            is_activated: Set(user.is_activated),
        }
        .update(&self.db)
        .await;
        match result {
            Ok(model) => Ok(user_from_model(model)),
            Err(DbErr::RecordNotUpdated) => Err(PantryServiceError::InvalidUser),
            Err(e) if is_unique_violation(&e) => Err(PantryServiceError::UserAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("update user").into()),
        }
    }

    async fn delete(&self, id: UserId) -> Result<bool, PantryServiceError> {
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    let memberships = user_storages::Entity::find()
                        .filter(user_storages::Column::UserId.eq(id.0))
                        .all(txn)
                        .await?;
                    let mut sole = Vec::new();
                    for membership in memberships {
                        let members = user_storages::Entity::find()
                            .filter(user_storages::Column::StorageId.eq(membership.storage_id))
                            .count(txn)
                            .await?;
                        if members <= 1 {
                            sole.push(membership.storage_id);
                        }
                    }
                    // A storage must never outlive its last member.
                    if !sole.is_empty() {
                        articles::Entity::delete_many()
                            .filter(articles::Column::StorageId.is_in(sole.clone()))
                            .exec(txn)
                            .await?;
                        user_storages::Entity::delete_many()
                            .filter(user_storages::Column::StorageId.is_in(sole.clone()))
                            .exec(txn)
                            .await?;
                        storages::Entity::delete_many()
                            .filter(storages::Column::Id.is_in(sole))
                            .exec(txn)
                            .await?;
                    }
                    let result = users::Entity::delete_by_id(id.0).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete user")?;
        Ok(deleted)
    }

    async fn list_activated(&self) -> Result<Vec<User>, PantryServiceError> {
        let models = users::Entity::find()
            .filter(users::Column::IsActivated.eq(true))
            .order_by_asc(users::Column::Name)
            .all(&self.db)
            .await
            .context("list activated users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: UserId(model.id),
        name: model.name,
        password_hash: model.password_hash,
        email: model.email,
        is_activated: model.is_activated,
    }
}

// ── Registration repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRegistrationRepository {
    pub db: DatabaseConnection,
}

impl RegistrationRepository for DbRegistrationRepository {
    async fn find_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<UserRegistration>, PantryServiceError> {
        let model = user_registrations::Entity::find()
            .filter(user_registrations::Column::UserId.eq(user_id.0))
            .order_by_desc(user_registrations::Column::Id)
            .one(&self.db)
            .await
            .context("find registration by user")?;
        Ok(model.map(|m| UserRegistration {
            token: m.token,
            user_id: UserId(m.user_id),
        }))
    }

    async fn consume(&self, token: &str) -> Result<Option<UserId>, PantryServiceError> {
        let token = token.to_owned();
        let user_id = self
            .db
            .transaction::<_, Option<i32>, DbErr>(|txn| {
                Box::pin(async move {
                    let Some(registration) = user_registrations::Entity::find()
                        .filter(user_registrations::Column::Token.eq(token))
                        .one(txn)
                        .await?
                    else {
                        return Ok(None);
                    };
                    user_registrations::Entity::delete_by_id(registration.id)
                        .exec(txn)
                        .await?;
                    users::Entity::update_many()
                        .col_expr(users::Column::IsActivated, Expr::value(true))
                        .filter(users::Column::Id.eq(registration.user_id))
                        .exec(txn)
                        .await?;
                    Ok(Some(registration.user_id))
                })
            })
            .await
            .context("consume registration token")?;
        Ok(user_id.map(UserId))
    }
}

// ── Storage repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStorageRepository {
    pub db: DatabaseConnection,
}

impl StorageRepository for DbStorageRepository {
    async fn find_by_id(&self, id: StorageId) -> Result<Option<Storage>, PantryServiceError> {
        let model = storages::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find storage by id")?;
        Ok(model.map(storage_from_model))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Storage>, PantryServiceError> {
        let models = storages::Entity::find()
            .filter(storages::Column::Name.eq(name))
            .order_by_asc(storages::Column::Id)
            .all(&self.db)
            .await
            .context("find storages by name")?;
        Ok(models.into_iter().map(storage_from_model).collect())
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Storage>, PantryServiceError> {
        let models = storages::Entity::find()
            .filter(storages::Column::Id.in_subquery(member_storage_ids(user_id)))
            .order_by_asc(storages::Column::Id)
            .all(&self.db)
            .await
            .context("list storages for user")?;
        Ok(models.into_iter().map(storage_from_model).collect())
    }

    async fn create_with_member(
        &self,
        name: &str,
        user_id: UserId,
    ) -> Result<Storage, PantryServiceError> {
        let name = name.to_owned();
        let model = self
            .db
            .transaction::<_, storages::Model, DbErr>(|txn| {
                Box::pin(async move {
                    let storage = storages::ActiveModel {
                        id: NotSet,
                        name: Set(name),
                    }
                    .insert(txn)
                    .await?;
                    user_storages::ActiveModel {
                        id: NotSet,
                        user_id: Set(user_id.0),
                        storage_id: Set(storage.id),
                    }
                    .insert(txn)
                    .await?;
                    Ok(storage)
                })
            })
            .await
            .context("create storage with member")?;
        Ok(storage_from_model(model))
    }

    async fn rename(&self, id: StorageId, name: &str) -> Result<Storage, PantryServiceError> {
        let result = storages::ActiveModel {
            id: Unchanged(id.0),
            name: Set(name.to_owned()),
        }
        .update(&self.db)
        .await;
        match result {
            Ok(model) => Ok(storage_from_model(model)),
            Err(DbErr::RecordNotUpdated) => Err(PantryServiceError::InvalidStorage),
            Err(e) => Err(anyhow::Error::new(e).context("rename storage").into()),
        }
    }

    async fn delete_if_empty(&self, id: StorageId) -> Result<bool, PantryServiceError> {
        // articles.storage_id is ON DELETE RESTRICT, so an article inserted after the
        // count makes the delete fail instead of orphaning it.
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    let remaining = articles::Entity::find()
                        .filter(articles::Column::StorageId.eq(id.0))
                        .count(txn)
                        .await?;
                    if remaining > 0 {
                        return Ok(false);
                    }
                    user_storages::Entity::delete_many()
                        .filter(user_storages::Column::StorageId.eq(id.0))
                        .exec(txn)
                        .await?;
                    storages::Entity::delete_by_id(id.0).exec(txn).await?;
                    Ok(true)
                })
            })
            .await
            .context("delete storage if empty")?;
        Ok(deleted)
    }
}

fn storage_from_model(model: storages::Model) -> Storage {
    Storage {
        id: StorageId(model.id),
        name: model.name,
    }
}

// ── Membership repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMembershipRepository {
    pub db: DatabaseConnection,
}

impl MembershipRepository for DbMembershipRepository {
    async fn is_member(
        &self,
        user_id: UserId,
        storage_id: StorageId,
    ) -> Result<bool, PantryServiceError> {
        let count = user_storages::Entity::find()
            .filter(user_storages::Column::UserId.eq(user_id.0))
            .filter(user_storages::Column::StorageId.eq(storage_id.0))
            .count(&self.db)
            .await
            .context("check storage membership")?;
        Ok(count > 0)
    }
}

// ── Article repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbArticleRepository {
    pub db: DatabaseConnection,
}

impl ArticleRepository for DbArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, PantryServiceError> {
        let model = articles::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find article by id")?;
        Ok(model.map(article_from_model))
    }

    async fn list_by_storage(
        &self,
        storage_id: StorageId,
    ) -> Result<Vec<Article>, PantryServiceError> {
        let models = articles::Entity::find()
            .filter(articles::Column::StorageId.eq(storage_id.0))
            .order_by_asc(articles::Column::ExpirationDate)
            .order_by_asc(articles::Column::Id)
            .all(&self.db)
            .await
            .context("list articles by storage")?;
        Ok(models.into_iter().map(article_from_model).collect())
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Article>, PantryServiceError> {
        let models = articles::Entity::find()
            .filter(articles::Column::StorageId.in_subquery(member_storage_ids(user_id)))
            .order_by_asc(articles::Column::ExpirationDate)
            .order_by_asc(articles::Column::Id)
            .all(&self.db)
            .await
            .context("list articles for user")?;
        Ok(models.into_iter().map(article_from_model).collect())
    }

    async fn create(&self, article: &NewArticle) -> Result<Article, PantryServiceError> {
        let model = articles::ActiveModel {
            id: NotSet,
            storage_id: Set(article.storage_id.0),
            name: Set(article.name.clone()),
            quantity: Set(article.quantity),
            price: Set(article.price),
            expiration_date: Set(article.expiration_date),
            insertion_date: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .context("create article")?;
        Ok(article_from_model(model))
    }

    async fn update(&self, article: &Article) -> Result<Article, PantryServiceError> {
        let result = articles::ActiveModel {
            id: Unchanged(article.id.0),
            storage_id: Set(article.storage_id.0),
            name: Set(article.name.clone()),
            quantity: Set(article.quantity),
            price: Set(article.price),
            expiration_date: Set(article.expiration_date),
            insertion_date: NotSet,
        }
        .update(&self.db)
        .await;
        match result {
            Ok(model) => Ok(article_from_model(model)),
            Err(DbErr::RecordNotUpdated) => Err(PantryServiceError::InvalidArticle),
            Err(e) => Err(anyhow::Error::new(e).context("update article").into()),
        }
    }

    async fn delete(&self, id: ArticleId) -> Result<bool, PantryServiceError> {
        let result = articles::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete article")?;
        Ok(result.rows_affected > 0)
    }

    async fn reduce_quantity(
        &self,
        id: ArticleId,
    ) -> Result<Option<QuantityChange>, PantryServiceError> {
        let change = self
            .db
            .transaction::<_, Option<QuantityChange>, DbErr>(|txn| {
                Box::pin(async move {
                    let Some(model) = articles::Entity::find_by_id(id.0)
                        .lock_exclusive()
                        .one(txn)
                        .await?
                    else {
                        return Ok(None);
                    };
                    if model.quantity <= 1 {
                        articles::Entity::delete_by_id(model.id).exec(txn).await?;
                        return Ok(Some(QuantityChange::Removed(article_from_model(model))));
                    }
                    let quantity = model.quantity - 1;
                    let mut active = model.into_active_model();
                    active.quantity = Set(quantity);
                    let updated = active.update(txn).await?;
                    Ok(Some(QuantityChange::Reduced(article_from_model(updated))))
                })
            })
            .await
            .context("reduce article quantity")?;
        Ok(change)
    }
}

fn article_from_model(model: articles::Model) -> Article {
    Article {
        id: ArticleId(model.id),
        storage_id: StorageId(model.storage_id),
        name: model.name,
        quantity: model.quantity,
        price: model.price,
        expiration_date: model.expiration_date,
        insertion_date: model.insertion_date,
    }
}

// ── Barcode cache repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBarcodeCacheRepository {
    pub db: DatabaseConnection,
}

impl BarcodeCacheRepository for DbBarcodeCacheRepository {
    async fn get(&self, barcode: &str) -> Result<Option<String>, PantryServiceError> {
        let model = barcode_cache::Entity::find_by_id(barcode.to_owned())
            .one(&self.db)
            .await
            .context("read barcode cache")?;
        Ok(model.map(|m| m.data))
    }

    async fn insert_if_absent(&self, barcode: &str, data: &str) -> Result<(), PantryServiceError> {
        barcode_cache::Entity::insert(barcode_cache::ActiveModel {
            barcode: Set(barcode.to_owned()),
            data: Set(data.to_owned()),
        })
        .on_conflict(
            OnConflict::column(barcode_cache::Column::Barcode)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("write barcode cache")?;
        Ok(())
    }
}
