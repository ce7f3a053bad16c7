//! `tracing` events emitted when a statement is rendered.
//!
//! Enabled by the `tracing` crate feature. Without it every function here is
//! a no-op.

use crate::error::BuildError;
use crate::qb::StatementKind;

/// Longest SQL string (in bytes) written to a log event.
pub const MAX_LOGGED_SQL_BYTES: usize = 200;

/// Truncate to at most `max_bytes`, backing off to a char boundary.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(feature = "tracing")]
pub(crate) fn built(kind: StatementKind, sql: &str, param_count: usize) {
    let shown = truncate_sql_bytes(sql, MAX_LOGGED_SQL_BYTES);
    let truncated = shown.len() < sql.len();
    tracing::debug!(
        target: "fluent_sql::sql",
        statement = kind.as_str(),
        param_count,
        truncated,
        sql = %shown,
        "statement built",
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn built(_kind: StatementKind, _sql: &str, _param_count: usize) {}

#[cfg(feature = "tracing")]
pub(crate) fn rejected(kind: StatementKind, err: &BuildError) {
    tracing::warn!(
        target: "fluent_sql::sql",
        statement = kind.as_str(),
        error = %err,
        "statement rejected",
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn rejected(_kind: StatementKind, _err: &BuildError) {}
