//! Customer records, signup, and token issuance.

use chrono::Utc;
use customers_core::credentials::generate_token;
use customers_core::error::CustomerError;
use customers_core::types::DbId;
use customers_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use customers_db::models::customer_token::CreateCustomerToken;
use customers_db::repositories::{CustomerRepo, CustomerTokenRepo};
use customers_db::DbPool;
use serde::Deserialize;

use crate::auth::password::{hash_password, verify_password, PasswordConfig};

/// Signup input. The password is hashed before it reaches the database.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerAuth {
    pub name: String,
    pub phone: String,
    pub password: String,
}

/// Customer CRUD plus phone/password login.
#[derive(Clone)]
pub struct CustomersService {
    pool: DbPool,
    password: PasswordConfig,
    token_ttl: chrono::Duration,
}

impl CustomersService {
    pub fn new(pool: DbPool, password: PasswordConfig, token_ttl: chrono::Duration) -> Self {
        Self {
            pool,
            password,
            token_ttl,
        }
    }

    /// Fetch one customer.
    pub async fn by_id(&self, id: DbId) -> Result<Customer, CustomerError> {
        CustomerRepo::find_by_id(&self.pool, id)
            .await
            .map_err(internal)?
            .ok_or(CustomerError::NotFound)
    }

    /// Every customer, ordered by id.
    pub async fn all(&self) -> Result<Vec<Customer>, CustomerError> {
        CustomerRepo::list(&self.pool).await.map_err(internal)
    }

    /// Active customers only, ordered by id.
    pub async fn all_active(&self) -> Result<Vec<Customer>, CustomerError> {
        CustomerRepo::list_active(&self.pool).await.map_err(internal)
    }

    /// Register a customer. New customers are always active.
    pub async fn create(&self, input: CustomerAuth) -> Result<Customer, CustomerError> {
        let config = self.password;
        let password = input.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password, &config))
            .await
            .map_err(|e| CustomerError::Internal(format!("Hashing task failed: {e}")))?
            .map_err(|e| CustomerError::Internal(format!("Password hashing error: {e}")))?;

        let customer = CustomerRepo::create(
            &self.pool,
            &CreateCustomer {
                name: input.name,
                phone: input.phone,
                password_hash,
            },
        )
        .await
        .map_err(internal)?;

        tracing::info!(customer_id = customer.id, "Customer created");
        Ok(customer)
    }

    /// Replace a customer's name and phone.
    pub async fn update(
        &self,
        id: DbId,
        name: String,
        phone: String,
    ) -> Result<Customer, CustomerError> {
        CustomerRepo::update(&self.pool, id, &UpdateCustomer { name, phone })
            .await
            .map_err(internal)?
            .ok_or(CustomerError::NotFound)
    }

    /// Delete a customer, returning its last state.
    pub async fn remove_by_id(&self, id: DbId) -> Result<Customer, CustomerError> {
        let customer = CustomerRepo::delete(&self.pool, id)
            .await
            .map_err(internal)?
            .ok_or(CustomerError::NotFound)?;
        tracing::info!(customer_id = id, "Customer removed");
        Ok(customer)
    }

    pub async fn block_by_id(&self, id: DbId) -> Result<Customer, CustomerError> {
        self.set_active(id, false).await
    }

    pub async fn unblock_by_id(&self, id: DbId) -> Result<Customer, CustomerError> {
        self.set_active(id, true).await
    }

    async fn set_active(&self, id: DbId, active: bool) -> Result<Customer, CustomerError> {
        CustomerRepo::set_active(&self.pool, id, active)
            .await
            .map_err(internal)?
            .ok_or(CustomerError::NotFound)
    }

    /// Exchange phone + password for a fresh session token.
    ///
    /// An unknown phone and a wrong password both yield
    /// [`CustomerError::InvalidPassword`].
    pub async fn token_for_customer(
        &self,
        phone: &str,
        password: &str,
    ) -> Result<String, CustomerError> {
        let Some(creds) = CustomerRepo::find_credentials_by_phone(&self.pool, phone)
            .await
            .map_err(internal)?
        else {
            tracing::debug!("Token requested for unregistered phone");
            return Err(CustomerError::InvalidPassword);
        };

        let password = password.to_owned();
        let hash = creds.password;
        let valid = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| CustomerError::Internal(format!("Verification task failed: {e}")))?
            .map_err(|e| CustomerError::Internal(format!("Password verification error: {e}")))?;

        if !valid {
            tracing::debug!(customer_id = creds.id, "Token requested with wrong password");
            return Err(CustomerError::InvalidPassword);
        }

        let expire = Utc::now()
            .checked_add_signed(self.token_ttl)
            .ok_or_else(|| {
                tracing::error!(ttl_secs = self.token_ttl.num_seconds(), "Token expiry out of range");
                CustomerError::Internal("Token expiry out of range".into())
            })?;

        let token = generate_token();
        CustomerTokenRepo::create(
            &self.pool,
            &CreateCustomerToken {
                token: token.clone(),
                customer_id: creds.id,
                expire,
            },
        )
        .await
        .map_err(internal)?;

        tracing::info!(customer_id = creds.id, "Customer token issued");
        Ok(token)
    }
}

/// Log a driver error and collapse it into [`CustomerError::Internal`].
fn internal(err: sqlx::Error) -> CustomerError {
    tracing::error!(error = %err, "Customer query failed");
    CustomerError::Internal(err.to_string())
}
