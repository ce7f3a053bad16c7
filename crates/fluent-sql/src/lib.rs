//! # fluent-sql
//!
//! A small in-memory SQL statement assembler.
//!
//! Describe SELECT, INSERT and UPDATE statements through chained method calls
//! and get back a SQL string with positional `?` placeholders plus the ordered
//! argument list to bind to them.
//!
//! ## Features
//!
//! - **Values never touch the SQL text**: every argument goes through a `?`
//! - **Order is the contract**: WHERE predicates render and bind in the order they were added
//! - **Conditional chaining**: every setter has an `_if` twin that is a no-op when its check is false
//! - **Pure rendering**: building borrows the builder and can be repeated
//!
//! Table and column names are trusted and written verbatim.
//!
//! ## Query Builder (qb)
//!
//! ```
//! use fluent_sql::prelude::*;
//!
//! let (sql, args) = Select::builder()
//!     .select(["id", "name", "email"])
//!     .from("users")
//!     .where_is_equal("name", "frank")
//!     .where_is_less_than("age", 50)
//!     .where_is_greater_than_or_equal_to_if("age", 30, false)
//!     .where_in("role", ["admin", "owner"])
//!     .order_by("email", true)
//!     .limit(5)
//!     .to_sql()?;
//!
//! assert_eq!(
//!     sql,
//!     "SELECT id, name, email FROM users WHERE name = ? AND age < ? AND role IN (?,?) \
//!      ORDER BY email DESC LIMIT 5"
//! );
//! assert_eq!(args, values!["frank", 50, "admin", "owner"]);
//! # Ok::<(), fluent_sql::BuildError>(())
//! ```

mod macros;

pub mod error;
pub mod prelude;
pub mod qb;
mod trace;

pub use error::{BuildError, BuildResult};
pub use qb::predicate;
pub use qb::{
    Arg, BuiltQuery, Filter, Insert, Predicate, Predicates, RawValue, Select, Statement,
    StatementKind, Table, Update, Value, insert_into, select, update,
};
pub use trace::MAX_LOGGED_SQL_BYTES;
