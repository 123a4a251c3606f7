/// Pantry service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PantryConfig {
    /// Database connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `PANTRY_PORT`.
    pub pantry_port: u16,
    /// Base URL of the Open Food Facts API. Env var: `OPENFOODFACTS_URL`.
    pub openfoodfacts_url: String,
    /// Upper bound for one external product lookup (default 5000). Env var: `BARCODE_LOOKUP_TIMEOUT_MS`.
    pub barcode_lookup_timeout_ms: u64,
    /// Whether `POST /users` is open. Env var: `ENABLE_SIGNUP`.
    pub enable_signup: bool,
    /// Whether self-registered users must follow an activation link. Env var: `REQUIRE_ACTIVATION`.
    pub require_activation: bool,
    /// Public base URL, used for activation links. Env var: `BASE_URL`.
    pub base_url: String,
}

impl PantryConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            pantry_port: std::env::var("PANTRY_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            openfoodfacts_url: std::env::var("OPENFOODFACTS_URL")
                .unwrap_or_else(|_| "https://world.openfoodfacts.org".to_owned()),
            barcode_lookup_timeout_ms: std::env::var("BARCODE_LOOKUP_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            enable_signup: env_flag("ENABLE_SIGNUP", false),
            require_activation: env_flag("REQUIRE_ACTIVATION", true),
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3114".to_owned()),
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .map(|v| parse_flag(&v).unwrap_or(default))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
