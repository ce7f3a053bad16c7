//! Error types for fluent-sql

use thiserror::Error;

/// Result type alias for statement rendering
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised while rendering a statement.
///
/// Rendering either succeeds completely or fails before any SQL is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The statement needs at least one row/assignment that was never added
    #[error("empty {statement} statement: {reason}")]
    EmptyStatement {
        statement: &'static str,
        reason: &'static str,
    },

    /// No table was set before rendering
    #[error("{statement} statement has no table")]
    MissingTable { statement: &'static str },
}

impl BuildError {
    /// Create an empty statement error
    pub fn empty_statement(statement: &'static str, reason: &'static str) -> Self {
        Self::EmptyStatement { statement, reason }
    }

    /// Create a missing table error
    pub fn missing_table(statement: &'static str) -> Self {
        Self::MissingTable { statement }
    }

    /// Check if this is an empty statement error
    pub fn is_empty_statement(&self) -> bool {
        matches!(self, Self::EmptyStatement { .. })
    }

    /// Check if this is a missing table error
    pub fn is_missing_table(&self) -> bool {
        matches!(self, Self::MissingTable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = BuildError::empty_statement("INSERT", "no rows added");
        assert_eq!(err.to_string(), "empty INSERT statement: no rows added");

        let err = BuildError::missing_table("SELECT");
        assert_eq!(err.to_string(), "SELECT statement has no table");
    }

    #[test]
    fn test_kind_checks() {
        assert!(BuildError::empty_statement("UPDATE", "x").is_empty_statement());
        assert!(!BuildError::empty_statement("UPDATE", "x").is_missing_table());
        assert!(BuildError::missing_table("UPDATE").is_missing_table());
    }
}
