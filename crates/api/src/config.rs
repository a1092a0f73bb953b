use crate::auth::password::PasswordConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `9999`).
    pub port: u16,
    /// Upper bound on pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Lifetime of an issued customer token in seconds (default: `3600`).
    pub token_ttl_secs: i64,
    /// Argon2 cost parameters for new password hashes.
    pub password: PasswordConfig,
    /// Gate the `/customers` routes behind manager Basic auth (default: `false`).
    pub manager_auth_enabled: bool,
}

/// Default customer token lifetime in seconds.
const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Longest accepted customer token lifetime (one year).
pub const MAX_TOKEN_TTL_SECS: i64 = 365 * 24 * 3600;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default  |
    /// |----------------------------|----------|
    /// | `HOST`                     | `0.0.0.0`|
    /// | `PORT`                     | `9999`   |
    /// | `DB_MAX_CONNECTIONS`       | `20`     |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`     |
    /// | `TOKEN_TTL_SECS`           | `3600`   |
    /// | `PASSWORD_HASH_T_COST`     | `2`      |
    /// | `PASSWORD_HASH_M_COST_KIB` | `19456`  |
    /// | `MANAGER_AUTH_ENABLED`     | `false`  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "9999".into())
            .parse()
            .expect("PORT must be a valid u16");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| customers_db::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let token_ttl_secs: i64 = std::env::var("TOKEN_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_SECS.to_string())
            .parse()
            .expect("TOKEN_TTL_SECS must be a valid i64");
        assert!(
            valid_token_ttl(token_ttl_secs),
            "TOKEN_TTL_SECS must be between 1 and {MAX_TOKEN_TTL_SECS}"
        );

        let manager_auth_enabled = std::env::var("MANAGER_AUTH_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let password = PasswordConfig::from_env();

        Self {
            host,
            port,
            db_max_connections,
            request_timeout_secs,
            token_ttl_secs,
            password,
            manager_auth_enabled,
        }
    }

    /// Token lifetime as a [`chrono::Duration`].
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.token_ttl_secs)
    }
}

fn valid_token_ttl(secs: i64) -> bool {
    (1..=MAX_TOKEN_TTL_SECS).contains(&secs)
}

/// Interpret common truthy spellings; anything else is `false`.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
