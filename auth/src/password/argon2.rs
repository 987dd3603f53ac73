use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Fixed salt for verifications that have no stored hash to check against.
const ABSENT_ACCOUNT_SALT: &str = "cG90b20tYWJzZW50LXNhbHQ";

/// Salted one-way password hashing (Argon2id).
///
/// The cost is fixed per instance; hashes produced with one cost remain
/// verifiable after the cost changes because the parameters are stored in
/// the PHC string.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Create a password hasher with the Argon2id recommended defaults
    /// (19 MiB memory, 2 iterations, 1 lane).
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Create a password hasher with an explicit cost.
    ///
    /// # Arguments
    /// * `memory_kib` - Memory size in KiB (at least `8 * parallelism`)
    /// * `iterations` - Number of passes (at least 1)
    /// * `parallelism` - Degree of parallelism (at least 1)
    ///
    /// # Errors
    /// * `InvalidCost` - Parameters are outside the Argon2 limits
    pub fn with_cost(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordError::InvalidCost(e.to_string()))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a plaintext password securely.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password too long or the salt could not be generated
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash format is invalid or uses unsupported parameters
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        match self
            .argon2()
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }

    /// Run the same Argon2 work as `verify` when there is no stored hash.
    ///
    /// Always reports a mismatch. Keeps a lookup miss as slow as a wrong
    /// password so response timing does not reveal which accounts exist.
    ///
    /// # Errors
    /// * `HashingFailed` - Password too long for the algorithm
    pub fn verify_absent(&self, password: &str) -> Result<bool, PasswordError> {
        let salt = SaltString::from_b64(ABSENT_ACCOUNT_SALT)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        Ok(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
