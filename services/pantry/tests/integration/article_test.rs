use beforeyougo_domain::id::{ArticleId, StorageId};
use beforeyougo_domain::storage_ref::StorageRef;
use beforeyougo_pantry::domain::types::QuantityChange;
use beforeyougo_pantry::error::PantryServiceError;
use beforeyougo_pantry::usecase::article::{
    CreateArticleInput, CreateArticleUseCase, DeleteArticleUseCase, ListArticlesUseCase,
    ListInventoryUseCase, ReduceQuantityUseCase, SetExpirationUseCase, UpdateArticleInput,
    UpdateArticleUseCase,
};

use crate::helpers::{ALICE, BOB, InMemoryPantry, date, today};

fn create_input(name: &str, storage: StorageRef) -> CreateArticleInput {
    CreateArticleInput {
        name: name.into(),
        storage,
        expiration_date: None,
        quantity: None,
        price: None,
    }
}

// ── CreateArticleUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_article_with_defaults() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let uc = CreateArticleUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let article = uc
        .execute(ALICE, create_input("  Milk ", fridge.id.into()), today())
        .await
        .unwrap();

    assert_eq!(article.name, "Milk");
    assert_eq!(article.storage_id, fridge.id);
    assert_eq!(article.quantity, 1);
    assert_eq!(article.price, None);
    assert_eq!(article.expiration_date, date(2024, 5, 13));
}

#[tokio::test]
async fn should_create_article_in_storage_addressed_by_name() {
    let store = InMemoryPantry::new();
    let freezer = store.seed_storage(ALICE, "Freezer");
    let uc = CreateArticleUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let article = uc
        .execute(
            ALICE,
            CreateArticleInput {
                name: "Peas".into(),
                storage: StorageRef::from("Freezer"),
                expiration_date: Some(date(2024, 9, 1)),
                quantity: Some(4),
                price: Some(1.99),
            },
            today(),
        )
        .await
        .unwrap();

    assert_eq!(article.storage_id, freezer.id);
    assert_eq!(article.quantity, 4);
    assert_eq!(article.price, Some(1.99));
    assert_eq!(article.expiration_date, date(2024, 9, 1));
}

#[tokio::test]
async fn should_reject_create_in_foreign_storage() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let uc = CreateArticleUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let result = uc
        .execute(BOB, create_input("Milk", fridge.id.into()), today())
        .await;

    assert!(
        matches!(result, Err(PantryServiceError::InvalidStorage)),
        "expected InvalidStorage, got {result:?}"
    );
    assert!(store.data.lock().unwrap().articles.is_empty());
}

#[tokio::test]
async fn should_reject_blank_name_and_non_positive_quantity() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let uc = CreateArticleUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let blank = uc
        .execute(ALICE, create_input("   ", fridge.id.into()), today())
        .await;
    let zero = uc
        .execute(
            ALICE,
            CreateArticleInput {
                quantity: Some(0),
                ..create_input("Milk", fridge.id.into())
            },
            today(),
        )
        .await;

    assert!(matches!(blank, Err(PantryServiceError::MissingData)));
    assert!(matches!(zero, Err(PantryServiceError::MissingData)));
}

// ── ListArticlesUseCase / ListInventoryUseCase ───────────────────────────────

#[tokio::test]
async fn should_list_created_article_exactly_once() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let create = CreateArticleUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };
    let created = create
        .execute(
            ALICE,
            CreateArticleInput {
                name: "Cheese".into(),
                storage: fridge.id.into(),
                expiration_date: Some(date(2024, 6, 1)),
                quantity: Some(2),
                price: Some(3.5),
            },
            today(),
        )
        .await
        .unwrap();

    let list = ListArticlesUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };
    let articles = list.execute(ALICE, &fridge.id.into()).await.unwrap();

    assert_eq!(articles, vec![created]);
}

#[tokio::test]
async fn should_reject_listing_foreign_storage() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    store.seed_article(fridge.id, "Milk", 1, today());
    let list = ListArticlesUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let result = list.execute(BOB, &StorageRef::from("Fridge")).await;

    assert!(matches!(result, Err(PantryServiceError::InvalidStorage)));
}

#[tokio::test]
async fn should_list_inventory_across_storages_soonest_first() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let pantry = store.seed_storage(ALICE, "Pantry");
    let foreign = store.seed_storage(BOB, "Cellar");
    let rice = store.seed_article(pantry.id, "Rice", 1, date(2025, 1, 1));
    let milk = store.seed_article(fridge.id, "Milk", 1, date(2024, 5, 12));
    store.seed_article(foreign.id, "Wine", 1, date(2024, 5, 11));
    let eggs = store.seed_article(fridge.id, "Eggs", 6, date(2024, 5, 20));

    let uc = ListInventoryUseCase {
        articles: store.clone(),
    };
    let names: Vec<String> = uc
        .execute(ALICE)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();

    assert_eq!(names, vec![milk.name, eggs.name, rice.name]);
}

// ── UpdateArticleUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_overwrite_only_provided_fields() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let article = store.seed_article(fridge.id, "Milk", 2, date(2024, 5, 12));
    let uc = UpdateArticleUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let updated = uc
        .execute(
            ALICE,
            article.id,
            UpdateArticleInput {
                name: Some(String::new()),
                quantity: Some(5),
                price: Some(2.25),
                ..UpdateArticleInput::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Milk");
    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.price, Some(2.25));
    assert_eq!(updated.expiration_date, date(2024, 5, 12));
    assert_eq!(store.article(article.id), Some(updated));
}

#[tokio::test]
async fn should_move_article_to_another_owned_storage() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let freezer = store.seed_storage(ALICE, "Freezer");
    let article = store.seed_article(fridge.id, "Bread", 1, today());
    let uc = UpdateArticleUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let moved = uc
        .execute(
            ALICE,
            article.id,
            UpdateArticleInput {
                storage: Some(StorageRef::from("Freezer")),
                ..UpdateArticleInput::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(moved.storage_id, freezer.id);
}

#[tokio::test]
async fn should_fail_update_when_move_target_is_foreign() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let cellar = store.seed_storage(BOB, "Cellar");
    let article = store.seed_article(fridge.id, "Bread", 1, today());
    let uc = UpdateArticleUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let result = uc
        .execute(
            ALICE,
            article.id,
            UpdateArticleInput {
                name: Some("Toast".into()),
                storage: Some(cellar.id.into()),
                ..UpdateArticleInput::default()
            },
        )
        .await;

    assert!(matches!(result, Err(PantryServiceError::InvalidStorage)));
    let unchanged = store.article(article.id).unwrap();
    assert_eq!(unchanged.storage_id, fridge.id);
    assert_eq!(unchanged.name, "Bread");
}

#[tokio::test]
async fn should_reject_update_of_foreign_article() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let article = store.seed_article(fridge.id, "Milk", 1, today());
    let uc = UpdateArticleUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let result = uc
        .execute(
            BOB,
            article.id,
            UpdateArticleInput {
                name: Some("Stolen".into()),
                ..UpdateArticleInput::default()
            },
        )
        .await;

    assert!(matches!(result, Err(PantryServiceError::InvalidArticle)));
}

// ── DeleteArticleUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_article_and_return_last_state() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let article = store.seed_article(fridge.id, "Milk", 3, today());
    let uc = DeleteArticleUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let deleted = uc.execute(ALICE, article.id).await.unwrap();

    assert_eq!(deleted, article);
    assert!(store.article(article.id).is_none());
}

#[tokio::test]
async fn should_reject_delete_of_missing_or_foreign_article() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let article = store.seed_article(fridge.id, "Milk", 1, today());
    let uc = DeleteArticleUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let foreign = uc.execute(BOB, article.id).await;
    let missing = uc.execute(ALICE, ArticleId(999)).await;

    assert!(matches!(foreign, Err(PantryServiceError::InvalidArticle)));
    assert!(matches!(missing, Err(PantryServiceError::InvalidArticle)));
    assert!(store.article(article.id).is_some());
}

// ── ReduceQuantityUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_decrement_quantity_and_keep_article() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let article = store.seed_article(fridge.id, "Eggs", 3, today());
    let uc = ReduceQuantityUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let change = uc.execute(ALICE, article.id).await.unwrap();

    match change {
        QuantityChange::Reduced(a) => assert_eq!(a.quantity, 2),
        other => panic!("expected Reduced, got {other:?}"),
    }
    assert_eq!(store.article(article.id).unwrap().quantity, 2);
}

#[tokio::test]
async fn should_remove_article_when_last_unit_is_consumed() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let article = store.seed_article(fridge.id, "Yoghurt", 1, today());
    let uc = ReduceQuantityUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let change = uc.execute(ALICE, article.id).await.unwrap();

    assert!(matches!(change, QuantityChange::Removed(ref a) if a.id == article.id));
    assert!(store.article(article.id).is_none());
}

#[tokio::test]
async fn should_reject_consuming_foreign_article() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let article = store.seed_article(fridge.id, "Yoghurt", 1, today());
    let uc = ReduceQuantityUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let result = uc.execute(BOB, article.id).await;

    assert!(matches!(result, Err(PantryServiceError::InvalidArticle)));
    assert!(store.article(article.id).is_some());
}

#[tokio::test]
async fn should_grant_access_through_shared_membership() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    store.share_storage(BOB, fridge.id);
    let article = store.seed_article(fridge.id, "Juice", 2, today());
    let uc = ReduceQuantityUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    assert!(uc.execute(BOB, article.id).await.is_ok());
    assert_eq!(store.article(article.id).unwrap().quantity, 1);
}

// ── SetExpirationUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_set_expiration_relative_to_today() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let article = store.seed_article(fridge.id, "Ham", 1, today());
    let uc = SetExpirationUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let updated = uc.execute(ALICE, article.id, 7, today()).await.unwrap();

    assert_eq!(updated.expiration_date, date(2024, 5, 17));
    assert_eq!(updated.days_left(today()), 7);
}

#[tokio::test]
async fn should_reject_expiration_change_on_unknown_article() {
    let store = InMemoryPantry::new();
    store.seed_storage(ALICE, "Fridge");
    let uc = SetExpirationUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let result = uc.execute(ALICE, ArticleId(42), 3, today()).await;

    assert!(matches!(result, Err(PantryServiceError::InvalidArticle)));
}

#[tokio::test]
async fn should_not_resolve_article_whose_storage_id_is_unknown() {
    let store = InMemoryPantry::new();
    let orphan = store.seed_article(StorageId(77), "Ghost", 1, today());
    let uc = DeleteArticleUseCase {
        ownership: store.ownership(),
        articles: store.clone(),
    };

    let result = uc.execute(ALICE, orphan.id).await;

    assert!(matches!(result, Err(PantryServiceError::InvalidArticle)));
}
