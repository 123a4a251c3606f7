use tracing::info;

use crate::domain::repository::RegistrationNotifier;
use crate::domain::types::User;
use crate::error::PantryServiceError;

/// Publishes activation links to the service log. Mail delivery is left to the operator.
#[derive(Clone)]
pub struct LogRegistrationNotifier {
    pub base_url: String,
}

impl LogRegistrationNotifier {
    pub fn activation_link(&self, token: &str) -> String {
        format!("{}/users/activate/{token}", self.base_url.trim_end_matches('/'))
    }
}

impl RegistrationNotifier for LogRegistrationNotifier {
    async fn send_activation(&self, user: &User, token: &str) -> Result<(), PantryServiceError> {
        info!(
            user_id = %user.id,
            email = user.email.as_deref().unwrap_or("-"),
            link = %self.activation_link(token),
            "activation link issued"
        );
        Ok(())
    }
}
