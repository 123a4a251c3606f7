use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use beforeyougo_domain::storage_ref::StorageRef;
use beforeyougo_pantry::domain::repository::{BarcodeCacheRepository, ProductLookupPort};
use beforeyougo_pantry::domain::types::ProductInfo;
use beforeyougo_pantry::error::PantryServiceError;
use beforeyougo_pantry::usecase::barcode::LookupBarcodeUseCase;
use beforeyougo_pantry::usecase::checkin::{CheckInInput, CheckInUseCase};

use crate::helpers::{ALICE, BOB, InMemoryPantry, date, today};

// ── MockBarcodeCache / MockProducts ──────────────────────────────────────────

#[derive(Default)]
struct MockBarcodeCache {
    entries: Arc<Mutex<Vec<(String, String)>>>,
}

impl BarcodeCacheRepository for MockBarcodeCache {
    async fn get(&self, barcode: &str) -> Result<Option<String>, PantryServiceError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|(b, _)| b == barcode)
            .map(|(_, d)| d.clone()))
    }

    async fn insert_if_absent(&self, barcode: &str, data: &str) -> Result<(), PantryServiceError> {
        let mut entries = self.entries.lock().unwrap();
        if !entries.iter().any(|(b, _)| b == barcode) {
            entries.push((barcode.to_owned(), data.to_owned()));
        }
        Ok(())
    }
}

struct MockProducts {
    product: Option<ProductInfo>,
    calls: AtomicUsize,
}

impl ProductLookupPort for MockProducts {
    async fn fetch(&self, _barcode: &str) -> anyhow::Result<Option<ProductInfo>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.product.clone())
    }
}

fn checkin(
    store: &InMemoryPantry,
    product: Option<ProductInfo>,
) -> CheckInUseCase<InMemoryPantry, InMemoryPantry, MockBarcodeCache, MockProducts> {
    CheckInUseCase {
        ownership: store.ownership(),
        barcodes: LookupBarcodeUseCase {
            cache: MockBarcodeCache::default(),
            products: MockProducts {
                product,
                calls: AtomicUsize::new(0),
            },
            timeout: Duration::from_secs(5),
        },
    }
}

fn milk() -> ProductInfo {
    ProductInfo {
        product_name: Some("Milk".into()),
        brands: Some("Farm".into()),
        quantity: Some("1L".into()),
    }
}

// ── CheckInUseCase ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_fill_name_from_barcode() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let uc = checkin(&store, Some(milk()));

    let draft = uc
        .execute(
            ALICE,
            CheckInInput {
                barcode: Some("4037400344799".into()),
                name: None,
                storage: StorageRef::from("Fridge"),
            },
            today(),
        )
        .await
        .unwrap();

    assert_eq!(draft.name, "Milk (Farm) - 1L");
    assert_eq!(draft.barcode.as_deref(), Some("4037400344799"));
    assert_eq!(draft.storage, fridge);
    assert_eq!(draft.calendar.first_of_month, date(2024, 5, 1));
    assert_eq!(draft.calendar.last_day(), Some(date(2024, 6, 30)));
}

#[tokio::test]
async fn should_prefer_given_name_over_barcode_lookup() {
    let store = InMemoryPantry::new();
    let fridge = store.seed_storage(ALICE, "Fridge");
    let uc = checkin(&store, Some(milk()));

    let draft = uc
        .execute(
            ALICE,
            CheckInInput {
                barcode: Some("4037400344799".into()),
                name: Some("Oat milk".into()),
                storage: fridge.id.into(),
            },
            today(),
        )
        .await
        .unwrap();

    assert_eq!(draft.name, "Oat milk");
    assert_eq!(uc.barcodes.products.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn should_allow_empty_name_when_barcode_is_unknown() {
    let store = InMemoryPantry::new();
    store.seed_storage(ALICE, "Fridge");
    let uc = checkin(&store, None);

    let draft = uc
        .execute(
            ALICE,
            CheckInInput {
                barcode: Some("0000000000000".into()),
                name: None,
                storage: StorageRef::from("Fridge"),
            },
            today(),
        )
        .await
        .unwrap();

    assert_eq!(draft.name, "");
}

#[tokio::test]
async fn should_require_barcode_or_name() {
    let store = InMemoryPantry::new();
    store.seed_storage(ALICE, "Fridge");
    let uc = checkin(&store, Some(milk()));

    let result = uc
        .execute(
            ALICE,
            CheckInInput {
                barcode: Some("  ".into()),
                name: Some(String::new()),
                storage: StorageRef::from("Fridge"),
            },
            today(),
        )
        .await;

    assert!(matches!(result, Err(PantryServiceError::MissingData)));
}

#[tokio::test]
async fn should_reject_check_in_to_foreign_storage_without_lookup() {
    let store = InMemoryPantry::new();
    store.seed_storage(ALICE, "Fridge");
    let uc = checkin(&store, Some(milk()));

    let result = uc
        .execute(
            BOB,
            CheckInInput {
                barcode: Some("4037400344799".into()),
                name: None,
                storage: StorageRef::from("Fridge"),
            },
            today(),
        )
        .await;

    assert!(matches!(result, Err(PantryServiceError::InvalidStorage)));
    assert_eq!(uc.barcodes.products.calls.load(Ordering::SeqCst), 0);
}
