//! Customer token validation and manager credential checks.

use chrono::Utc;
use customers_core::credentials::constant_time_eq;
use customers_core::error::SecurityError;
use customers_core::types::DbId;
use customers_db::repositories::{CustomerTokenRepo, ManagerRepo};
use customers_db::DbPool;

/// Compared against when the login is unknown, so both rejections do the same work.
const UNKNOWN_MANAGER_PASSWORD: &str = "unknown-manager-placeholder";

#[derive(Clone)]
pub struct SecurityService {
    pool: DbPool,
}

impl SecurityService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Resolve a token to the customer that owns it.
    ///
    /// Expired rows are reported as [`SecurityError::Expired`] and left in
    /// the table.
    pub async fn authenticate_customer(&self, token: &str) -> Result<DbId, SecurityError> {
        let owner = CustomerTokenRepo::find_owner(&self.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Token lookup failed");
                SecurityError::Internal(e.to_string())
            })?
            .ok_or(SecurityError::NoSuchUser)?;

        if owner.expire < Utc::now() {
            tracing::debug!(customer_id = owner.customer_id, "Expired token presented");
            return Err(SecurityError::Expired);
        }

        Ok(owner.customer_id)
    }

    /// Check manager credentials. Any lookup failure counts as a mismatch.
    ///
    /// Manager passwords are stored in plaintext; this compares them as such.
    pub async fn auth(&self, login: &str, password: &str) -> bool {
        match ManagerRepo::find_password(&self.pool, login).await {
            Ok(Some(stored)) => {
                let ok = constant_time_eq(password, &stored);
                if !ok {
                    tracing::debug!(login, "Manager password mismatch");
                }
                ok
            }
            Ok(None) => {
                std::hint::black_box(constant_time_eq(password, UNKNOWN_MANAGER_PASSWORD));
                tracing::debug!(login, "Unknown manager login");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Manager lookup failed");
                false
            }
        }
    }
}
