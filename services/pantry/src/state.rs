use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbArticleRepository, DbBarcodeCacheRepository, DbMembershipRepository,
    DbRegistrationRepository, DbStorageRepository, DbUserRepository,
};
use crate::infra::notifier::LogRegistrationNotifier;
use crate::infra::openfoodfacts::OpenFoodFactsClient;
use crate::infra::password::Argon2Hasher;
use crate::usecase::barcode::LookupBarcodeUseCase;
use crate::usecase::ownership::OwnershipValidator;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub products: OpenFoodFactsClient,
    pub barcode_timeout: Duration,
    pub enable_signup: bool,
    pub require_activation: bool,
    pub base_url: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn registration_repo(&self) -> DbRegistrationRepository {
        DbRegistrationRepository {
            db: self.db.clone(),
        }
    }

    pub fn storage_repo(&self) -> DbStorageRepository {
        DbStorageRepository {
            db: self.db.clone(),
        }
    }

    pub fn membership_repo(&self) -> DbMembershipRepository {
        DbMembershipRepository {
            db: self.db.clone(),
        }
    }

    pub fn article_repo(&self) -> DbArticleRepository {
        DbArticleRepository {
            db: self.db.clone(),
        }
    }

    pub fn barcode_cache_repo(&self) -> DbBarcodeCacheRepository {
        DbBarcodeCacheRepository {
            db: self.db.clone(),
        }
    }

    pub fn hasher(&self) -> Argon2Hasher {
        Argon2Hasher
    }

    pub fn notifier(&self) -> LogRegistrationNotifier {
        LogRegistrationNotifier {
            base_url: self.base_url.clone(),
        }
    }

    pub fn ownership(&self) -> OwnershipValidator<DbStorageRepository, DbMembershipRepository> {
        OwnershipValidator {
            storages: self.storage_repo(),
            memberships: self.membership_repo(),
        }
    }

    pub fn barcode_lookup(
        &self,
    ) -> LookupBarcodeUseCase<DbBarcodeCacheRepository, OpenFoodFactsClient> {
        LookupBarcodeUseCase {
            cache: self.barcode_cache_repo(),
            products: self.products.clone(),
            timeout: self.barcode_timeout,
        }
    }
}
