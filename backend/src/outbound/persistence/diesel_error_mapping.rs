//! Shared Diesel error mapping for the repositories in this module.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Report a pool failure through the port's connection constructor.
pub fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    connection(error.message().to_owned())
}

/// Classify a Diesel error as a connection or query failure.
///
/// Closed connections become connection errors; everything else is a query
/// error carrying a stable description rather than the raw driver text.
pub fn map_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: FnOnce(&'static str) -> E,
    C: FnOnce(&'static str) -> E,
{
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        _ => query("database error"),
    }
}

/// Column named by a unique-constraint violation, if `error` is one.
///
/// Constraints follow the PostgreSQL default naming `{table}_{column}_key`.
pub fn unique_violation_column(error: &DieselError, table: &str) -> Option<String> {
    let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = error else {
        return None;
    };
    let constraint = info.constraint_name()?;
    let column = constraint
        .strip_prefix(table)
        .and_then(|rest| rest.strip_prefix('_'))
        .and_then(|rest| rest.strip_suffix("_key"))
        .unwrap_or(constraint);
    Some(column.to_owned())
}

/// Database errors built without a live connection.
#[cfg(test)]
pub(super) mod fixtures {
    use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

    struct Info(Option<&'static str>);

    impl DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.0
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    /// A `kind` error naming `constraint`.
    pub fn database_error(
        kind: DatabaseErrorKind,
        constraint: Option<&'static str>,
    ) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(Info(constraint)))
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::database_error;
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum Mapped {
        Query(&'static str),
        Connection(&'static str),
    }

    #[rstest]
    #[case(DieselError::NotFound, Mapped::Query("record not found"))]
    #[case(
        database_error(DatabaseErrorKind::ClosedConnection, None),
        Mapped::Connection("database connection error")
    )]
    #[case(
        database_error(DatabaseErrorKind::ForeignKeyViolation, None),
        Mapped::Query("database error")
    )]
    fn diesel_errors_map_to_constructors(#[case] error: DieselError, #[case] expected: Mapped) {
        let mapped = map_diesel_error(error, Mapped::Query, Mapped::Connection);
        assert_eq!(mapped, expected);
    }

    #[rstest]
    fn pool_errors_keep_their_message() {
        let error = PoolError::Checkout("connection refused".to_owned());
        let mapped = map_pool_error(error, |message| message);
        assert_eq!(mapped, "connection refused");
    }

    #[rstest]
    #[case(Some("users_email_key"), Some("email"))]
    #[case(Some("users_username_key"), Some("username"))]
    #[case(Some("custom_constraint"), Some("custom_constraint"))]
    #[case(None, None)]
    fn unique_violations_name_the_column(
        #[case] constraint: Option<&'static str>,
        #[case] expected: Option<&str>,
    ) {
        let error = database_error(DatabaseErrorKind::UniqueViolation, constraint);
        assert_eq!(
            unique_violation_column(&error, "users").as_deref(),
            expected
        );
    }

    #[rstest]
    fn other_errors_are_not_unique_violations() {
        assert_eq!(unique_violation_column(&DieselError::NotFound, "users"), None);
    }
}
