use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use beforeyougo_domain::id::ArticleId;
use beforeyougo_domain::storage_ref::StorageRef;
use beforeyougo_identity::identity::IdentityHeaders;

use crate::domain::types::{Article, QuantityChange};
use crate::error::PantryServiceError;
use crate::handlers::today;
use crate::state::AppState;
use crate::usecase::article::{
    CreateArticleInput, CreateArticleUseCase, DeleteArticleUseCase, ListArticlesUseCase,
    ListInventoryUseCase, ReduceQuantityUseCase, SetExpirationUseCase, UpdateArticleInput,
    UpdateArticleUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ArticleResponse {
    pub id: i32,
    pub storage_id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: Option<f64>,
    pub expiration_date: NaiveDate,
    #[serde(serialize_with = "beforeyougo_core::serde::to_rfc3339_ms")]
    pub insertion_date: DateTime<Utc>,
    pub is_expired: bool,
    pub days_left: i64,
}

impl ArticleResponse {
    pub fn new(article: Article, today: NaiveDate) -> Self {
        Self {
            is_expired: article.is_expired(today),
            days_left: article.days_left(today),
            id: article.id.0,
            storage_id: article.storage_id.0,
            name: article.name,
            quantity: article.quantity,
            price: article.price,
            expiration_date: article.expiration_date,
            insertion_date: article.insertion_date,
        }
    }
}

fn article_list(articles: Vec<Article>) -> Json<Vec<ArticleResponse>> {
    let today = today();
    Json(
        articles
            .into_iter()
            .map(|a| ArticleResponse::new(a, today))
            .collect(),
    )
}

// ── Request types ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateArticleRequest {
    pub name: String,
    pub storage: StorageRef,
    pub expiration_date: Option<NaiveDate>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}

#[derive(Deserialize)]
pub struct UpdateArticleRequest {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub storage: Option<StorageRef>,
    pub expiration_date: Option<NaiveDate>,
    pub price: Option<f64>,
}

#[derive(Deserialize)]
pub struct SetExpirationRequest {
    pub remaining_days: i64,
}

// ── GET /articles ────────────────────────────────────────────────────────────

pub async fn list_inventory(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<ArticleResponse>>, PantryServiceError> {
    let uc = ListInventoryUseCase {
        articles: state.article_repo(),
    };
    let articles = uc.execute(identity.user_id).await?;
    Ok(article_list(articles))
}

// ── GET /storages/{storage}/articles ─────────────────────────────────────────

pub async fn list_storage_articles(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(storage): Path<String>,
) -> Result<Json<Vec<ArticleResponse>>, PantryServiceError> {
    let uc = ListArticlesUseCase {
        ownership: state.ownership(),
        articles: state.article_repo(),
    };
    let articles = uc
        .execute(identity.user_id, &StorageRef::from_segment(&storage))
        .await?;
    Ok(article_list(articles))
}

// ── POST /articles ───────────────────────────────────────────────────────────

pub async fn create_article(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateArticleRequest>,
) -> Result<(StatusCode, Json<ArticleResponse>), PantryServiceError> {
    let uc = CreateArticleUseCase {
        ownership: state.ownership(),
        articles: state.article_repo(),
    };
    let today = today();
    let article = uc
        .execute(
            identity.user_id,
            CreateArticleInput {
                name: body.name,
                storage: body.storage,
                expiration_date: body.expiration_date,
                quantity: body.quantity,
                price: body.price,
            },
            today,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ArticleResponse::new(article, today))))
}

// ── PATCH /articles/{article_id} ─────────────────────────────────────────────

pub async fn update_article(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
    Json(body): Json<UpdateArticleRequest>,
) -> Result<Json<ArticleResponse>, PantryServiceError> {
    let uc = UpdateArticleUseCase {
        ownership: state.ownership(),
        articles: state.article_repo(),
    };
    let article = uc
        .execute(
            identity.user_id,
            ArticleId(article_id),
            UpdateArticleInput {
                name: body.name,
                quantity: body.quantity,
                storage: body.storage,
                expiration_date: body.expiration_date,
                price: body.price,
            },
        )
        .await?;
    Ok(Json(ArticleResponse::new(article, today())))
}

// ── DELETE /articles/{article_id} ────────────────────────────────────────────

pub async fn delete_article(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> Result<Json<ArticleResponse>, PantryServiceError> {
    let uc = DeleteArticleUseCase {
        ownership: state.ownership(),
        articles: state.article_repo(),
    };
    let article = uc.execute(identity.user_id, ArticleId(article_id)).await?;
    Ok(Json(ArticleResponse::new(article, today())))
}

// ── POST /articles/{article_id}/consume ──────────────────────────────────────

/// 200 with the remaining article, or 204 once the last unit is gone.
pub async fn consume_article(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> Result<Response, PantryServiceError> {
    let uc = ReduceQuantityUseCase {
        ownership: state.ownership(),
        articles: state.article_repo(),
    };
    let response = match uc.execute(identity.user_id, ArticleId(article_id)).await? {
        QuantityChange::Reduced(article) => {
            Json(ArticleResponse::new(article, today())).into_response()
        }
        QuantityChange::Removed(_) => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}

// ── PUT /articles/{article_id}/expiration ────────────────────────────────────

pub async fn set_expiration(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
    Json(body): Json<SetExpirationRequest>,
) -> Result<Json<ArticleResponse>, PantryServiceError> {
    let uc = SetExpirationUseCase {
        ownership: state.ownership(),
        articles: state.article_repo(),
    };
    let today = today();
    let article = uc
        .execute(identity.user_id, ArticleId(article_id), body.remaining_days, today)
        .await?;
    Ok(Json(ArticleResponse::new(article, today)))
}
