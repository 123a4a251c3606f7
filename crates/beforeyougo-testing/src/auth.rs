//! Mock auth helpers for integration tests.
//!
//! Services behind the gateway receive `x-beforeyougo-user-id` injected by the gateway.
//! In tests, `MockAuth` produces that header directly so no gateway or session is needed.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use beforeyougo_domain::id::UserId;
use beforeyougo_identity::USER_ID_HEADER;

/// Identity injected into test requests.
pub struct MockAuth {
    pub user_id: UserId,
}

impl MockAuth {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(HeaderName::from_static(USER_ID_HEADER), self.header_value());
        map
    }

    /// The identity header value alone, for request builders.
    pub fn header_value(&self) -> HeaderValue {
        HeaderValue::from(self.user_id.0)
    }
}
