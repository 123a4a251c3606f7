//! Test utilities for BeforeYouGo services.
//!
//! Only for `[dev-dependencies]`.

pub mod auth;
