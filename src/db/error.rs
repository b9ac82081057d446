//! Database error types.
//!
//! This module provides abstracted error types for store operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Store operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Connection error: {message}")]
    #[diagnostic(
        code(catalog::db::connection_error),
        help("Check that MONGO_URI points to a reachable server")
    )]
    Connection { message: String },

    #[error("Query error: {message}")]
    #[diagnostic(code(catalog::db::query_error))]
    Query { message: String },

    #[error("Decode error: {message}")]
    #[diagnostic(code(catalog::db::decode_error))]
    Decode { message: String },

    #[error("Insert error: {message}")]
    #[diagnostic(code(catalog::db::insert_error))]
    Insert { message: String },
}

/// Result type for store operations.
pub type DbResult<T> = Result<T, DbError>;
