//! Fluent statement builders (QB).
//!
//! Every builder takes and returns itself by value, so calls chain freely and
//! in any order. Rendering borrows the builder and produces SQL with `?`
//! placeholders plus the matching argument list.
//!
//! # Usage
//!
//! ```
//! use fluent_sql::prelude::*;
//!
//! // SELECT
//! let (sql, args) = qb::select(["id", "name"])
//!     .from("users")
//!     .where_is_equal("age", 30)
//!     .limit(5)
//!     .to_sql()?;
//! assert_eq!(sql, "SELECT id, name FROM users WHERE age = ? LIMIT 5");
//! assert_eq!(args, vec![Value::Int(30)]);
//!
//! // INSERT
//! let (sql, _) = qb::insert_into("t")
//!     .set_columns(["a", "b"])
//!     .add_values([1, 2])
//!     .to_sql()?;
//! assert_eq!(sql, "INSERT INTO t (a, b) VALUES (?, ?)");
//!
//! // UPDATE
//! let (sql, _) = qb::update("users")
//!     .set("name", "x")
//!     .where_is_null("deleted_at")
//!     .to_sql()?;
//! assert_eq!(sql, "UPDATE users SET name = ? WHERE deleted_at IS NULL");
//! # Ok::<(), fluent_sql::BuildError>(())
//! ```

mod insert;
pub mod predicate;
mod select;
mod table;
mod traits;
mod update;
mod value;

pub use insert::Insert;
pub use predicate::{Arg, Predicate, Predicates};
pub use select::Select;
pub use table::Table;
pub use traits::{BuiltQuery, Filter, Statement, StatementKind};
pub use update::Update;
pub use value::{RawValue, Value};

/// Create a SELECT builder for the given columns.
///
/// # Example
/// ```
/// use fluent_sql::prelude::*;
///
/// let qb = qb::select(["*"]).from("users").where_is_not_null("email");
/// assert_eq!(qb.to_sql()?.0, "SELECT * FROM users WHERE email IS NOT NULL");
/// # Ok::<(), fluent_sql::BuildError>(())
/// ```
pub fn select<I, S>(columns: I) -> Select
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Select::builder().select(columns)
}

/// Create an INSERT builder for the given table.
pub fn insert_into(table: &str) -> Insert {
    Insert::into(table)
}

/// Create an UPDATE builder for the given table.
pub fn update(table: &str) -> Update {
    Update::builder().table(table)
}
