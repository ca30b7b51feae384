use thiserror::Error;

/// The closed set of failures the persistence layer can report.
///
/// The domain kinds (`NotFound`, `EmptyResult`, `Validation`) carry
/// human-readable messages and nothing else, in particular no transport
/// status codes. Callers that speak HTTP decide for themselves how each
/// kind maps onto a response.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load environment variables for database connection: {0}")]
    ConnectionConfigError(String),

    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    /// A storage-layer failure (constraint violation, connection loss, ...)
    /// surfacing unchanged. This layer never retries or swallows these.
    #[error("Database query failed: {0}")]
    QueryError(#[from] sqlx::Error),

    /// A lookup that must produce a row produced none. The message names
    /// what was asked for and is meant to be shown to the caller as-is.
    #[error("{0}")]
    NotFound(String),

    /// The top-customers ranking came back empty, which the contract
    /// treats as a failure rather than a valid empty list.
    #[error("Sorry, there was an error getting your results")]
    EmptyResult,

    /// An entity failed a data-model constraint before any SQL was issued.
    #[error("{0}")]
    Validation(String),
}
