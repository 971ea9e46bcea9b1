//! Login and registration inputs.
//!
//! Raw form strings are validated here, before any service sees them.

use std::fmt;

use zeroize::Zeroizing;

use super::seeding::{SEED_AUTHOR_EMAIL, SEED_AUTHOR_USERNAME};
use super::user::{Email, UserValidationError, Username};

/// Domain error returned when login or registration values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
    /// Email was not a plausible address.
    InvalidEmail,
    /// Username or email belongs to the seed author account.
    ReservedAccount,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "Username must not be empty"),
            Self::EmptyPassword => write!(f, "Password must not be empty"),
            Self::InvalidEmail => write!(f, "Email must be a valid address"),
            Self::ReservedAccount => write!(f, "That username or email is reserved"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

impl From<UserValidationError> for CredentialsValidationError {
    fn from(value: UserValidationError) -> Self {
        match value {
            UserValidationError::EmptyUsername | UserValidationError::InvalidId => {
                Self::EmptyUsername
            }
            UserValidationError::InvalidEmail => Self::InvalidEmail,
        }
    }
}

fn require_password(password: &str) -> Result<Zeroizing<String>, CredentialsValidationError> {
    if password.is_empty() {
        return Err(CredentialsValidationError::EmptyPassword);
    }
    Ok(Zeroizing::new(password.to_owned()))
}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use yelp_camp::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" colt ", "password").unwrap();
/// assert_eq!(creds.username().as_ref(), "colt");
/// assert_eq!(creds.password(), "password");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: Username,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(
        username: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: require_password(password)?,
        })
    }

    /// Username suitable for user lookups.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Password provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated sign-up request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    username: Username,
    email: Email,
    password: Zeroizing<String>,
}

impl Registration {
    /// Construct a registration from raw form inputs.
    pub fn try_from_parts(
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let username = Username::new(username)?;
        let email = Email::new(email)?;
        if username.as_ref().eq_ignore_ascii_case(SEED_AUTHOR_USERNAME)
            || email.as_ref() == SEED_AUTHOR_EMAIL
        {
            return Err(CredentialsValidationError::ReservedAccount);
        }
        Ok(Self {
            username,
            email,
            password: require_password(password)?,
        })
    }

    /// Requested username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Contact address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Plain-text password, hashed before storage.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", CredentialsValidationError::EmptyUsername)]
    #[case("   ", "pw", CredentialsValidationError::EmptyUsername)]
    #[case("user", "", CredentialsValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  colt  ", " secret ")]
    #[case("alice", "correct horse battery staple")]
    fn valid_credentials_trim_username_only(#[case] username: &str, #[case] password: &str) {
        let creds = LoginCredentials::try_from_parts(username, password)
            .expect("valid inputs should succeed");
        assert_eq!(creds.username().as_ref(), username.trim());
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    #[case("", "a@example.com", "pw", CredentialsValidationError::EmptyUsername)]
    #[case("colt", "example.com", "pw", CredentialsValidationError::InvalidEmail)]
    #[case("colt", "a@example.com", "", CredentialsValidationError::EmptyPassword)]
    #[case("seed-admin", "a@example.com", "pw", CredentialsValidationError::ReservedAccount)]
    #[case(" Seed-Admin ", "a@example.com", "pw", CredentialsValidationError::ReservedAccount)]
    #[case(
        "colt",
        "seed-admin@yelp-camp.invalid",
        "pw",
        CredentialsValidationError::ReservedAccount
    )]
    fn invalid_registrations(
        #[case] username: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        assert_eq!(
            Registration::try_from_parts(username, email, password),
            Err(expected)
        );
    }

    #[rstest]
    fn registration_normalises_email() {
        let registration = Registration::try_from_parts("colt", "A@Example.com", "pw")
            .expect("valid registration");
        assert_eq!(registration.email().as_ref(), "a@example.com");
        assert_eq!(registration.password(), "pw");
    }
}
