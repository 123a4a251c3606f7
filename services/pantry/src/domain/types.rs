use chrono::{DateTime, Days, NaiveDate, Utc};

use beforeyougo_domain::id::{ArticleId, StorageId, UserId};

/// Articles stay "fresh" this many days past their expiration date.
pub const EXPIRY_GRACE_DAYS: u64 = 2;
/// Shelf life assumed when an article is created without an expiration date.
pub const DEFAULT_SHELF_LIFE_DAYS: u64 = 3;
pub const REGISTRATION_TOKEN_LEN: usize = 32;
/// Placeholder for product fields the barcode provider did not return.
pub const MISSING_FIELD: &str = "-";

/// A registered account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub is_activated: bool,
}

/// User row before the database assigns an id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub is_activated: bool,
}

/// Pending activation for a self-registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRegistration {
    pub token: String,
    pub user_id: UserId,
}

/// A named inventory location. Access is granted through memberships only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    pub id: StorageId,
    pub name: String,
}

/// A perishable item in one storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub storage_id: StorageId,
    pub name: String,
    pub quantity: i32,
    pub price: Option<f64>,
    pub expiration_date: NaiveDate,
    pub insertion_date: DateTime<Utc>,
}

impl Article {
    /// Expired once the expiration date is more than [`EXPIRY_GRACE_DAYS`] behind `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today
            .checked_sub_days(Days::new(EXPIRY_GRACE_DAYS))
            .is_some_and(|cutoff| self.expiration_date < cutoff)
    }

    /// Whole days until expiration: 0 on the day itself, negative afterwards.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.expiration_date - today).num_days()
    }
}

/// Article row before the database assigns an id and insertion time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub storage_id: StorageId,
    pub name: String,
    pub quantity: i32,
    pub price: Option<f64>,
    pub expiration_date: NaiveDate,
}

/// Outcome of consuming one unit of an article.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityChange {
    /// Quantity went down by one; carries the updated article.
    Reduced(Article),
    /// The last unit was consumed and the article was deleted; carries its last state.
    Removed(Article),
}

/// Product fields returned by the barcode provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductInfo {
    pub product_name: Option<String>,
    pub brands: Option<String>,
    pub quantity: Option<String>,
}

impl ProductInfo {
    /// `"{product_name} ({brands}) - {quantity}"`, with `-` for missing fields.
    pub fn display_name(&self) -> String {
        fn field(value: &Option<String>) -> &str {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(MISSING_FIELD)
        }
        format!(
            "{} ({}) - {}",
            field(&self.product_name),
            field(&self.brands),
            field(&self.quantity)
        )
    }
}

/// User names are restricted to ASCII letters, digits, `_` and `-`.
pub fn is_valid_user_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
