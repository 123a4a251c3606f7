//! sea-orm entities for the pantry service.

pub mod articles;
pub mod barcode_cache;
pub mod storages;
pub mod user_registrations;
pub mod user_storages;
pub mod users;
