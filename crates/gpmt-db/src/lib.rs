//! Client boundary for the cluster's configuration store.
//!
//! The rest of the tool consumes exactly one capability from the database:
//! executing a SQL query and getting back rows of column-name → value
//! mappings. Everything else (connection pooling, retries, catalog knowledge)
//! stays behind the [`ConfigStore`] trait so callers can be tested against
//! canned rows without a running cluster.

mod client;

pub use client::{ConnectionParams, PgConfigStore};

use std::collections::HashMap;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// A single result cell. Greenplum reports `datadir || '/log'` as text, but
/// drivers may hand the same column back as raw bytes depending on the wire
/// format negotiated for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Bytes(Vec<u8>),
    Null,
}

/// One result row, keyed by column name.
pub type Row = HashMap<String, Value>;

/// The one capability the diagnostics core consumes from the database.
///
/// Implementations must convert every failure mode into an [`Error`]; a bad
/// connection must never abort the process.
pub trait ConfigStore {
    fn execute_query(&self, sql: &str) -> Result<Vec<Row>>;
}

#[derive(Debug)]
pub enum Error {
    /// Could not establish a connection to the coordinator.
    Connection(String),

    /// The query itself failed.
    Query(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Connection(msg) => write!(f, "database connection failed: {}", msg),
            Error::Query(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_text_eq() {
        let a = Value::Text("/data/gpseg-1/log".to_string());
        let b = Value::Text("/data/gpseg-1/log".to_string());
        assert_eq!(a, b);
        assert_ne!(a, Value::Null);
    }

    #[test]
    fn test_error_display_includes_cause() {
        let err = Error::Connection("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));

        let err = Error::Query("relation does not exist".to_string());
        assert!(err.to_string().contains("relation does not exist"));
    }
}
