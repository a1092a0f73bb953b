//! Argon2id password hashing and verification.
//!
//! All password hashes use the Argon2id variant with a cryptographically random
//! salt generated via [`OsRng`]. The PHC string format is used for storage so
//! that algorithm parameters and salt are embedded in the hash itself, which
//! lets the cost be raised later without invalidating existing hashes.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

/// Argon2 cost parameters used when hashing new passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    /// Number of passes over memory.
    pub t_cost: u32,
    /// Memory size in KiB.
    pub m_cost_kib: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            t_cost: Params::DEFAULT_T_COST,
            m_cost_kib: Params::DEFAULT_M_COST,
        }
    }
}

impl PasswordConfig {
    /// Load cost parameters from `PASSWORD_HASH_T_COST` and
    /// `PASSWORD_HASH_M_COST_KIB`, falling back to the Argon2 defaults.
    ///
    /// # Panics
    ///
    /// Panics if a value is set but is not a valid u32 or is rejected by Argon2.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let t_cost: u32 = std::env::var("PASSWORD_HASH_T_COST")
            .map(|v| v.parse().expect("PASSWORD_HASH_T_COST must be a valid u32"))
            .unwrap_or(defaults.t_cost);

        let m_cost_kib: u32 = std::env::var("PASSWORD_HASH_M_COST_KIB")
            .map(|v| {
                v.parse()
                    .expect("PASSWORD_HASH_M_COST_KIB must be a valid u32")
            })
            .unwrap_or(defaults.m_cost_kib);

        let config = Self { t_cost, m_cost_kib };
        config
            .hasher()
            .unwrap_or_else(|e| panic!("Invalid password hash parameters: {e}"));
        config
    }

    fn hasher(&self) -> Result<Argon2<'static>, argon2::Error> {
        let params = Params::new(self.m_cost_kib, self.t_cost, Params::DEFAULT_P_COST, None)?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(
    password: &str,
    config: &PasswordConfig,
) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = config.hasher()?;
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Parameters are read from the hash itself. Returns `Ok(true)` if the password
/// matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
