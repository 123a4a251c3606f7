use chrono::NaiveDate;

use beforeyougo_domain::calendar::{CalendarWindow, compute_window};
use beforeyougo_domain::id::UserId;
use beforeyougo_domain::storage_ref::StorageRef;

use crate::domain::repository::{
    BarcodeCacheRepository, MembershipRepository, ProductLookupPort, StorageRepository,
};
use crate::domain::types::Storage;
use crate::error::PantryServiceError;
use crate::usecase::barcode::LookupBarcodeUseCase;
use crate::usecase::ownership::OwnershipValidator;

pub struct CheckInInput {
    pub barcode: Option<String>,
    pub name: Option<String>,
    pub storage: StorageRef,
}

/// Everything needed to let the user pick an expiration date for a new article.
#[derive(Debug, Clone)]
pub struct CheckInDraft {
    /// May be empty when only a barcode was given and the lookup produced nothing.
    pub name: String,
    pub barcode: Option<String>,
    pub storage: Storage,
    pub calendar: CalendarWindow,
}

pub struct CheckInUseCase<S, M, C, P>
where
    S: StorageRepository,
    M: MembershipRepository,
    C: BarcodeCacheRepository,
    P: ProductLookupPort,
{
    pub ownership: OwnershipValidator<S, M>,
    pub barcodes: LookupBarcodeUseCase<C, P>,
}

impl<S, M, C, P> CheckInUseCase<S, M, C, P>
where
    S: StorageRepository,
    M: MembershipRepository,
    C: BarcodeCacheRepository,
    P: ProductLookupPort,
{
    pub async fn execute(
        &self,
        user_id: UserId,
        input: CheckInInput,
        today: NaiveDate,
    ) -> Result<CheckInDraft, PantryServiceError> {
        let barcode = non_blank(input.barcode);
        let name = non_blank(input.name);
        if barcode.is_none() && name.is_none() {
            return Err(PantryServiceError::MissingData);
        }

        let storage = self
            .ownership
            .resolve_storage(user_id, &input.storage)
            .await?
            .ok_or(PantryServiceError::InvalidStorage)?;

        let name = match (name, barcode.as_deref()) {
            (Some(name), _) => name,
            (None, Some(code)) => self.barcodes.execute(code).await,
            (None, None) => String::new(),
        };

        Ok(CheckInDraft {
            name,
            barcode,
            storage,
            calendar: compute_window(today),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
