//! Password value object backed by bcrypt.
//!
//! The salt and work factor are embedded in the bcrypt hash string, so a
//! stored hash is all that is needed to verify a later login attempt.

use crate::config::MAX_PASSWORD_BYTES;
use crate::errors::{AppError, AppResult};

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password with a freshly generated salt.
    ///
    /// # Errors
    /// Returns a validation error if the password exceeds
    /// `MAX_PASSWORD_BYTES`, and an internal error if bcrypt rejects the
    /// work factor.
    pub fn new(plain_text: &str, cost: u32) -> AppResult<Self> {
        if !fits_bcrypt(plain_text) {
            return Err(AppError::validation(format!(
                "Password must be at most {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }

        let hash = bcrypt::hash(plain_text, cost)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed stored hash verifies as `false`, and so does any input
    /// longer than `MAX_PASSWORD_BYTES`: bcrypt would otherwise compare only
    /// its first 72 bytes.
    pub fn verify(&self, plain_text: &str) -> bool {
        if !fits_bcrypt(plain_text) {
            return false;
        }

        match bcrypt::verify(plain_text, &self.hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                false
            }
        }
    }
}

fn fits_bcrypt(plain_text: &str) -> bool {
    plain_text.len() <= MAX_PASSWORD_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    // Lowest cost bcrypt allows, keeps the suite fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = Password::new(plain, TEST_COST).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "TestPassword123";
        let hash = Password::new(plain, TEST_COST).unwrap().into_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::new(plain, TEST_COST).unwrap();
        let pass2 = Password::new(plain, TEST_COST).unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_hash_is_bcrypt_formatted() {
        let password = Password::new("secret", TEST_COST).unwrap();

        assert!(password.as_str().starts_with("$2b$04$"));
        assert_ne!(password.as_str(), "secret");
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let stored = Password::from_hash("not-a-bcrypt-hash".to_string());
        assert!(!stored.verify("not-a-bcrypt-hash"));
    }

    #[test]
    fn test_byte_limit_on_hashing() {
        assert!(Password::new(&"p".repeat(72), TEST_COST).is_ok());
        assert!(matches!(
            Password::new(&"p".repeat(73), TEST_COST),
            Err(AppError::Validation(_))
        ));
        // 24 three-byte characters is exactly 72 bytes
        assert!(Password::new(&"€".repeat(24), TEST_COST).is_ok());
        assert!(Password::new(&"€".repeat(25), TEST_COST).is_err());
    }

    #[test]
    fn test_verify_rejects_input_extending_stored_password() {
        let plain = "p".repeat(72);
        let password = Password::new(&plain, TEST_COST).unwrap();

        assert!(password.verify(&plain));
        assert!(!password.verify(&format!("{}WRONG-SUFFIX", plain)));
    }

    #[test]
    fn test_invalid_cost_is_rejected() {
        let result = Password::new("secret", 3);
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("secret", TEST_COST).unwrap();
        let rendered = format!("{:?}", password);

        assert!(!rendered.contains(password.as_str()));
        assert!(rendered.contains("[REDACTED]"));
    }
}
