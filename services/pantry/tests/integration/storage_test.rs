use beforeyougo_domain::id::StorageId;
use beforeyougo_domain::storage_ref::StorageRef;
use beforeyougo_pantry::error::PantryServiceError;
use beforeyougo_pantry::usecase::article::DeleteArticleUseCase;
use beforeyougo_pantry::usecase::storage::{
    CreateStorageUseCase, DeleteStorageUseCase, ListStoragesUseCase, UpdateStorageUseCase,
};

use crate::helpers::{ALICE, BOB, InMemoryPantry, today};

// ── CreateStorageUseCase / ListStoragesUseCase ───────────────────────────────

#[tokio::test]
async fn should_create_storage_with_creator_as_member() {
    let store = InMemoryPantry::new();
    let uc = CreateStorageUseCase {
        storages: store.clone(),
    };

    let storage = uc.execute(ALICE, " Fridge ").await.unwrap();

    assert_eq!(storage.name, "Fridge");
    assert_eq!(store.membership_count(storage.id), 1);
    let resolved = store
        .ownership()
        .resolve_storage(ALICE, &storage.id.into())
        .await
        .unwrap();
    assert_eq!(resolved, Some(storage));
}

#[tokio::test]
async fn should_reject_blank_storage_name() {
    let store = InMemoryPantry::new();
    let uc = CreateStorageUseCase {
        storages: store.clone(),
    };

    let result = uc.execute(ALICE, "  ").await;

    assert!(matches!(result, Err(PantryServiceError::MissingData)));
    assert_eq!(store.storage_count(), 0);
}

#[tokio::test]
async fn should_list_only_member_storages() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    store.seed_storage(BOB, "Cellar");
    let shared = store.seed_storage(BOB, "Garage");
    store.share_storage(ALICE, shared.id);
    let uc = ListStoragesUseCase {
        storages: store.clone(),
    };

    let storages = uc.execute(ALICE).await.unwrap();

    assert_eq!(storages, vec![fridge, shared]);
}

// ── UpdateStorageUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_rename_owned_storage() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let uc = UpdateStorageUseCase {
        ownership: store.ownership(),
    };

    let renamed = uc.execute(ALICE, fridge.id, "Kitchen fridge").await.unwrap();

    assert_eq!(renamed.id, fridge.id);
    assert_eq!(renamed.name, "Kitchen fridge");
}

#[tokio::test]
async fn should_reject_renaming_foreign_storage() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let uc = UpdateStorageUseCase {
        ownership: store.ownership(),
    };

    let result = uc.execute(BOB, fridge.id, "Mine now").await;

    assert!(matches!(result, Err(PantryServiceError::InvalidStorage)));
}

// ── DeleteStorageUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_refuse_deleting_non_empty_storage_until_emptied() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let article = store.seed_article(fridge.id, "Milk", 1, today());
    let delete_storage = DeleteStorageUseCase {
        ownership: store.ownership(),
    };

    let refused = delete_storage.execute(ALICE, fridge.id).await;
    assert!(
        matches!(refused, Err(PantryServiceError::NonEmptyStorage)),
        "expected NonEmptyStorage, got {refused:?}"
    );
    assert_eq!(store.membership_count(fridge.id), 1);

    DeleteArticleUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    }
    .execute(ALICE, article.id)
    .await
    .unwrap();

    let deleted = delete_storage.execute(ALICE, fridge.id).await.unwrap();
    assert_eq!(deleted, fridge);
    assert_eq!(store.membership_count(fridge.id), 0);

    for user in [ALICE, BOB] {
        let resolved = store
            .ownership()
            .resolve_storage(user, &StorageRef::from("Fridge"))
            .await
            .unwrap();
        assert!(resolved.is_none());
    }
}

#[tokio::test]
async fn should_remove_all_memberships_of_shared_storage() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    store.share_storage(BOB, fridge.id);
    let uc = DeleteStorageUseCase {
        ownership: store.ownership(),
    };

    uc.execute(BOB, fridge.id).await.unwrap();

    assert_eq!(store.membership_count(fridge.id), 0);
    assert_eq!(store.storage_count(), 0);
}

#[tokio::test]
async fn should_reject_deleting_foreign_or_unknown_storage() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let uc = DeleteStorageUseCase {
        ownership: store.ownership(),
    };

    let foreign = uc.execute(BOB, fridge.id).await;
    let unknown = uc.execute(ALICE, StorageId(404)).await;

    assert!(matches!(foreign, Err(PantryServiceError::InvalidStorage)));
    assert!(matches!(unknown, Err(PantryServiceError::InvalidStorage)));
    assert_eq!(store.storage_count(), 1);
}
