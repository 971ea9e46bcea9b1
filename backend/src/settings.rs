//! Process configuration read from the environment.
//!
//! All lookups go through [`mockable::Env`] so tests can supply values with
//! `MockEnv` instead of mutating the real process environment.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

use mockable::Env;
use tracing::warn;
use zeroize::Zeroizing;

const NODE_ENV: &str = "NODE_ENV";
const DB_URL_ENV: &str = "DB_URL";
const SECRET_ENV: &str = "SECRET";
const PORT_ENV: &str = "PORT";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const RUN_MIGRATIONS_ENV: &str = "RUN_MIGRATIONS";

/// Database used when `DB_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "postgres://127.0.0.1:5432/yelp-camp";
/// Session secret used when `SECRET` is unset. Not suitable for production.
pub const DEFAULT_SECRET: &str = "thisisasecret!";
/// Listen port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const PORT_EXPECTED: &str = "an integer between 0 and 65535";

/// Errors raised while reading configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Raw value found.
        value: String,
        /// Accepted forms.
        expected: &'static str,
    },
}

/// Deployment environment selected by `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnvironment {
    /// Any value other than `production`, including unset.
    Development,
    /// `NODE_ENV=production`.
    Production,
}

impl RuntimeEnvironment {
    fn from_env<E: Env>(env: &E) -> Self {
        match env.string(NODE_ENV).as_deref().map(str::trim) {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Server settings.
///
/// # Examples
/// ```
/// use mockable::MockEnv;
/// use yelp_camp::settings::{RuntimeEnvironment, Settings};
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "PORT" => Some("8080".to_owned()),
///     _ => None,
/// });
///
/// let settings = Settings::from_env(&env).expect("valid settings");
/// assert_eq!(settings.port, 8080);
/// assert_eq!(settings.environment, RuntimeEnvironment::Development);
/// assert!(!settings.cookie_secure);
/// ```
#[derive(Clone)]
pub struct Settings {
    /// Deployment environment.
    pub environment: RuntimeEnvironment,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Session secret.
    pub secret: Zeroizing<String>,
    /// Listen port on all interfaces.
    pub port: u16,
    /// Whether the session cookie carries the `Secure` flag.
    pub cookie_secure: bool,
    /// Whether to apply embedded migrations at startup.
    pub run_migrations: bool,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("environment", &self.environment)
            .field("database_url", &self.database_url)
            .field("secret", &"<redacted>")
            .field("port", &self.port)
            .field("cookie_secure", &self.cookie_secure)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

impl Settings {
    /// Read every setting, applying defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidEnv`] when `PORT`,
    /// `SESSION_COOKIE_SECURE` or `RUN_MIGRATIONS` cannot be parsed.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, SettingsError> {
        let environment = RuntimeEnvironment::from_env(env);
        let secret = match env.string(SECRET_ENV).filter(|value| !value.is_empty()) {
            Some(secret) => secret,
            None => {
                if environment == RuntimeEnvironment::Production {
                    warn!("SECRET not set in production; using the insecure default");
                }
                DEFAULT_SECRET.to_owned()
            }
        };

        Ok(Self {
            environment,
            database_url: database_url_from_env(env),
            secret: Zeroizing::new(secret),
            port: port_from_env(env)?,
            cookie_secure: bool_from_env(env, COOKIE_SECURE_ENV, false)?,
            run_migrations: bool_from_env(env, RUN_MIGRATIONS_ENV, true)?,
        })
    }

    /// Socket address the server binds: `0.0.0.0:PORT`.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Resolve `DB_URL`, falling back to [`DEFAULT_DATABASE_URL`].
pub fn database_url_from_env<E: Env>(env: &E) -> String {
    env.string(DB_URL_ENV)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned())
}

fn port_from_env<E: Env>(env: &E) -> Result<u16, SettingsError> {
    match env.string(PORT_ENV) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| SettingsError::InvalidEnv {
                name: PORT_ENV,
                value,
                expected: PORT_EXPECTED,
            }),
    }
}

fn bool_from_env<E: Env>(
    env: &E,
    name: &'static str,
    default_value: bool,
) -> Result<bool, SettingsError> {
    match env.string(name) {
        None => Ok(default_value),
        Some(value) => parse_bool(&value).ok_or(SettingsError::InvalidEnv {
            name,
            value,
            expected: BOOL_EXPECTED,
        }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for environment parsing.
    use std::collections::HashMap;

    use super::*;
    use mockable::MockEnv;
    use rstest::rstest;

    fn env_with(vars: &[(&str, &str)]) -> MockEnv {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        let mut env = MockEnv::new();
        env.expect_string()
            .returning(move |name| vars.get(name).cloned());
        env
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let settings = Settings::from_env(&env_with(&[])).expect("defaults");
        assert_eq!(settings.environment, RuntimeEnvironment::Development);
        assert_eq!(settings.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(settings.secret.as_str(), DEFAULT_SECRET);
        assert_eq!(settings.port, DEFAULT_PORT);
        assert!(!settings.cookie_secure);
        assert!(settings.run_migrations);
        assert_eq!(settings.bind_addr().to_string(), "0.0.0.0:3000");
    }

    #[rstest]
    fn debug_output_hides_the_secret() {
        let settings = Settings::from_env(&env_with(&[("SECRET", "hunter2")])).expect("settings");
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[rstest]
    fn explicit_values_override_defaults() {
        let env = env_with(&[
            ("NODE_ENV", "production"),
            ("DB_URL", "postgres://db/camp"),
            ("SECRET", "s3cret"),
            ("PORT", "8080"),
            ("SESSION_COOKIE_SECURE", "yes"),
            ("RUN_MIGRATIONS", "0"),
        ]);
        let settings = Settings::from_env(&env).expect("valid settings");
        assert_eq!(settings.environment, RuntimeEnvironment::Production);
        assert_eq!(settings.database_url, "postgres://db/camp");
        assert_eq!(settings.secret.as_str(), "s3cret");
        assert_eq!(settings.port, 8080);
        assert!(settings.cookie_secure);
        assert!(!settings.run_migrations);
    }

    #[rstest]
    #[case("PORT", "eighty", PORT_EXPECTED)]
    #[case("PORT", "70000", PORT_EXPECTED)]
    #[case("SESSION_COOKIE_SECURE", "maybe", BOOL_EXPECTED)]
    #[case("RUN_MIGRATIONS", "sometimes", BOOL_EXPECTED)]
    fn invalid_values_are_rejected(
        #[case] name: &'static str,
        #[case] value: &str,
        #[case] expected: &'static str,
    ) {
        let err = Settings::from_env(&env_with(&[(name, value)])).expect_err("invalid value");
        assert_eq!(
            err,
            SettingsError::InvalidEnv {
                name,
                value: value.to_owned(),
                expected,
            }
        );
    }

    #[rstest]
    #[case("development")]
    #[case("test")]
    #[case("")]
    fn only_production_selects_production(#[case] value: &str) {
        let settings =
            Settings::from_env(&env_with(&[("NODE_ENV", value)])).expect("valid settings");
        assert_eq!(settings.environment, RuntimeEnvironment::Development);
    }

    #[rstest]
    fn blank_database_url_uses_default() {
        assert_eq!(
            database_url_from_env(&env_with(&[("DB_URL", "  ")])),
            DEFAULT_DATABASE_URL
        );
    }
}
