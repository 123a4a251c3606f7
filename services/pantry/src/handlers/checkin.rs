use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use beforeyougo_domain::calendar::{CalendarWindow, compute_window};
use beforeyougo_domain::storage_ref::StorageRef;
use beforeyougo_identity::identity::IdentityHeaders;

use crate::error::PantryServiceError;
use crate::handlers::storage::StorageResponse;
use crate::handlers::today;
use crate::state::AppState;
use crate::usecase::checkin::{CheckInInput, CheckInUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CalendarDayResponse {
    pub date: NaiveDate,
    pub month: u32,
    pub weekday: u32,
    pub offset: i64,
}

#[derive(Serialize)]
pub struct CalendarResponse {
    pub today: NaiveDate,
    pub first_of_month: NaiveDate,
    pub first_of_next_month: NaiveDate,
    pub days: Vec<CalendarDayResponse>,
}

impl CalendarResponse {
    fn new(today: NaiveDate, window: CalendarWindow) -> Self {
        Self {
            today,
            first_of_month: window.first_of_month,
            first_of_next_month: window.first_of_next_month,
            days: window
                .days
                .into_iter()
                .map(|(date, day)| CalendarDayResponse {
                    date,
                    month: day.month,
                    weekday: day.weekday,
                    offset: day.offset,
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
pub struct CheckInResponse {
    pub name: String,
    pub barcode: Option<String>,
    pub storage: StorageResponse,
    pub calendar: CalendarResponse,
}

#[derive(Deserialize)]
pub struct CheckInRequest {
    pub barcode: Option<String>,
    pub name: Option<String>,
    pub storage: StorageRef,
}

// ── POST /checkin ────────────────────────────────────────────────────────────

pub async fn check_in(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CheckInRequest>,
) -> Result<Json<CheckInResponse>, PantryServiceError> {
    let uc = CheckInUseCase {
        ownership: state.ownership(),
        barcodes: state.barcode_lookup(),
    };
    let today = today();
    let draft = uc
        .execute(
            identity.user_id,
            CheckInInput {
                barcode: body.barcode,
                name: body.name,
                storage: body.storage,
            },
            today,
        )
        .await?;
    Ok(Json(CheckInResponse {
        name: draft.name,
        barcode: draft.barcode,
        storage: draft.storage.into(),
        calendar: CalendarResponse::new(today, draft.calendar),
    }))
}

// ── GET /calendar ────────────────────────────────────────────────────────────

pub async fn calendar(_identity: IdentityHeaders) -> Json<CalendarResponse> {
    let today = today();
    Json(CalendarResponse::new(today, compute_window(today)))
}
