//! Password hashing.
//!
//! Credentials are stored as Argon2id PHC strings, which carry the
//! algorithm, parameters and salt next to the digest in a single column.

use std::fmt;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use thiserror::Error;

use super::user::{User, UserId};

/// Hashing could not produce a PHC string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashingError(String);

/// Stored credential material for one account.
///
/// # Examples
/// ```
/// use yelp_camp::domain::PasswordHash;
///
/// let hash = PasswordHash::derive("hunter2").expect("hashable");
/// assert!(hash.as_phc().starts_with("$argon2id$"));
/// assert!(hash.verify("hunter2"));
/// assert!(!hash.verify("hunter3"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash {
    phc: String,
}

impl PasswordHash {
    /// Hash `password` with Argon2id under a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHashingError`] when the hasher rejects its input.
    pub fn derive(password: &str) -> Result<Self, PasswordHashingError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| Self {
                phc: hash.to_string(),
            })
            .map_err(|err| PasswordHashingError(err.to_string()))
    }

    /// Rebuild a hash read back from storage.
    pub fn from_phc(phc: impl Into<String>) -> Self {
        Self { phc: phc.into() }
    }

    /// A hash no password verifies against, for accounts that cannot log in.
    #[must_use]
    pub fn unusable() -> Self {
        Self::from_phc(String::new())
    }

    /// The PHC string as persisted.
    #[must_use]
    pub fn as_phc(&self) -> &str {
        &self.phc
    }

    /// Check `password` against the stored hash. Unparsable hashes never
    /// verify.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        password_hash::PasswordHash::new(&self.phc).is_ok_and(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash").finish_non_exhaustive()
    }
}

/// A user together with its credential material, as persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    /// Public account data.
    pub user: User,
    /// Argon2 password hash.
    pub password: PasswordHash,
}

impl StoredUser {
    /// Identifier of the wrapped user.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        self.user.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn derive_uses_fresh_salt() {
        let first = PasswordHash::derive("secret").expect("hash");
        let second = PasswordHash::derive("secret").expect("hash");
        assert_ne!(first.as_phc(), second.as_phc());
        assert!(first.as_phc().starts_with("$argon2id$"));
        assert!(!first.as_phc().contains("secret"));
    }

    #[rstest]
    fn stored_phc_verifies_after_round_trip() {
        let original = PasswordHash::derive("correct horse").expect("hash");
        let restored = PasswordHash::from_phc(original.as_phc());
        assert!(restored.verify("correct horse"));
        assert!(!restored.verify("Correct horse"));
    }

    #[rstest]
    #[case("")]
    #[case("anything")]
    fn unusable_hash_never_verifies(#[case] password: &str) {
        assert!(!PasswordHash::unusable().verify(password));
    }

    #[rstest]
    #[case("not a phc string")]
    #[case("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$")]
    fn malformed_hashes_never_verify(#[case] phc: &str) {
        assert!(!PasswordHash::from_phc(phc).verify("anything"));
    }

    #[rstest]
    fn debug_output_hides_the_hash() {
        let hash = PasswordHash::derive("secret").expect("hash");
        let rendered = format!("{hash:?}");
        assert!(!rendered.contains(hash.as_phc()));
    }
}
