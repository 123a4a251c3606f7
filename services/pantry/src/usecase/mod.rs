pub mod article;
pub mod barcode;
pub mod checkin;
pub mod ownership;
pub mod storage;
pub mod user;
