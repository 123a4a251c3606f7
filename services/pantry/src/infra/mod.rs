pub mod db;
pub mod notifier;
pub mod openfoodfacts;
pub mod password;
