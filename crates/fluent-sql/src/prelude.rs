//! Convenient imports for typical `fluent-sql` usage.
//!
//! Brings the builders and the [`Filter`]/[`Statement`] traits into scope, so
//! `where_*` and `to_sql` resolve without extra imports:
//!
//! ```
//! use fluent_sql::prelude::*;
//! ```

pub use crate::qb::{self, Filter, Statement};
pub use crate::qb::{BuiltQuery, Insert, Select, Table, Update, Value};
pub use crate::{BuildError, BuildResult, values};
