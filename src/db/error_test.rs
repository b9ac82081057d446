//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "invalid connection string".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Connection error: invalid connection string"
    );
}

#[test]
fn query_error_displays_correctly() {
    let err = DbError::Query {
        message: "server selection timeout".to_string(),
    };
    assert_eq!(err.to_string(), "Query error: server selection timeout");
}

#[test]
fn decode_error_displays_correctly() {
    let err = DbError::Decode {
        message: "missing field `language`".to_string(),
    };
    assert_eq!(err.to_string(), "Decode error: missing field `language`");
}

#[test]
fn insert_error_displays_correctly() {
    let err = DbError::Insert {
        message: "not primary".to_string(),
    };
    assert_eq!(err.to_string(), "Insert error: not primary");
}

#[test]
fn db_result_err_returns_error() {
    let result: DbResult<()> = Err(DbError::Insert {
        message: "write concern".to_string(),
    });
    assert!(result.is_err());
}
