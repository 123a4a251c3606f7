use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use beforeyougo_identity::identity::IdentityHeaders;

use crate::state::AppState;

#[derive(Serialize)]
pub struct BarcodeResponse {
    pub barcode: String,
    /// Empty when the product is unknown or the provider could not be reached.
    pub name: String,
}

// ── GET /barcodes/{barcode} ──────────────────────────────────────────────────

pub async fn lookup_barcode(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(barcode): Path<String>,
) -> Json<BarcodeResponse> {
    let name = state.barcode_lookup().execute(&barcode).await;
    Json(BarcodeResponse { barcode, name })
}
