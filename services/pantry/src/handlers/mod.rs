pub mod article;
pub mod barcode;
pub mod checkin;
pub mod health;
pub mod storage;
pub mod user;

/// Calendar date the request is evaluated against (server local time).
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
