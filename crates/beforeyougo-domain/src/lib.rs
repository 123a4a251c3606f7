//! Domain types shared across BeforeYouGo services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; `infra/` converts to and from them.

pub mod calendar;
pub mod id;
pub mod storage_ref;
