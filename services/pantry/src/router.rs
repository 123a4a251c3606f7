use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use beforeyougo_core::health::healthz;
use beforeyougo_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    article::{
        consume_article, create_article, delete_article, list_inventory, list_storage_articles,
        set_expiration, update_article,
    },
    barcode::lookup_barcode,
    checkin::{calendar, check_in},
    health::readyz,
    storage::{create_storage, delete_storage, list_storages, update_storage},
    user::{
        activate_user, clear_email, create_user, delete_me, get_me, list_users, login, update_me,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", get(list_users))
        .route("/users", post(create_user))
        .route("/users/login", post(login))
        .route("/users/activate/{token}", get(activate_user))
        .route("/users/@me", get(get_me))
        .route("/users/@me", patch(update_me))
        .route("/users/@me", delete(delete_me))
        .route("/users/@me/email", delete(clear_email))
        // Storages
        .route("/storages", get(list_storages))
        .route("/storages", post(create_storage))
        .route("/storages/{storage}", patch(update_storage))
        .route("/storages/{storage}", delete(delete_storage))
        .route("/storages/{storage}/articles", get(list_storage_articles))
        // Articles
        .route("/articles", get(list_inventory))
        .route("/articles", post(create_article))
        .route("/articles/{article_id}", patch(update_article))
        .route("/articles/{article_id}", delete(delete_article))
        .route("/articles/{article_id}/consume", post(consume_article))
        .route("/articles/{article_id}/expiration", put(set_expiration))
        // Check-in
        .route("/barcodes/{barcode}", get(lookup_barcode))
        .route("/checkin", post(check_in))
        .route("/calendar", get(calendar))
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
}
