//! Repository for the `managers` table.

use customers_core::types::DbId;
use sqlx::PgPool;

/// Provides lookup for manager credentials.
///
/// Passwords in this table are stored as plaintext. Do not copy that
/// pattern into new tables.
pub struct ManagerRepo;

impl ManagerRepo {
    /// Insert a manager, returning its id.
    ///
    /// The API has no route that creates managers. This exists for seeding,
    /// from tests or an operator's provisioning script.
    pub async fn create(pool: &PgPool, login: &str, password: &str) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO managers (login, password) VALUES ($1, $2) RETURNING id",
        )
        .bind(login)
        .bind(password)
        .fetch_one(pool)
        .await
    }

    /// Read the stored password for a login.
    pub async fn find_password(pool: &PgPool, login: &str) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT password FROM managers WHERE login = $1")
            .bind(login)
            .fetch_optional(pool)
            .await
    }
}
