use thiserror::Error;

/// Errors surfaced by [`SQLStore`](crate::SQLStore) implementations.
#[derive(Error, Debug)]
pub enum SQLError {
    /// A SELECT failed to prepare, bind, or map its rows.
    #[error("query error: {0}")]
    Query(String),

    /// An INSERT/UPDATE/DELETE statement failed.
    #[error("execution error: {0}")]
    Execution(String),

    /// The database file could not be opened or configured.
    #[error("connection error: {0}")]
    Connection(String),
}
