//! Identity types consumed by services sitting behind the authenticating gateway.

pub mod identity;

/// Header carrying the authenticated user's id, injected by the gateway.
pub const USER_ID_HEADER: &str = "x-beforeyougo-user-id";
