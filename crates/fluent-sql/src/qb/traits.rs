//! Trait definitions for statement builders.

use crate::error::{BuildError, BuildResult};
use crate::qb::predicate::{self, Predicate, Predicates};
use crate::qb::value::Value;
use crate::trace;

/// The kind of SQL statement a builder renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// SELECT query
    Select,
    /// INSERT statement
    Insert,
    /// UPDATE statement
    Update,
}

impl StatementKind {
    /// SQL keyword for this statement.
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
        }
    }
}

/// The result of rendering a statement.
///
/// `params` has exactly one entry per `?` in `sql`, in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

impl BuiltQuery {
    /// Create a new built query.
    pub fn new(sql: String, params: Vec<Value>) -> Self {
        Self { sql, params }
    }

    /// The bound arguments in placeholder order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Number of `?` placeholders in the SQL text.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }

    /// Split into the `(sql, args)` pair.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}

/// Base trait for all statement builders.
///
/// Rendering borrows the builder, so it never changes builder state and can be
/// repeated with identical results.
pub trait Statement {
    /// Which statement this builder renders.
    const KIND: StatementKind;

    /// Target table, if one was set.
    fn table_name(&self) -> Option<&str>;

    /// Render SQL and parameters against an already-checked table name.
    fn render(&self, table: &str) -> (String, Vec<Value>);

    /// Statement-specific checks run after the table check.
    fn validate(&self) -> BuildResult<()> {
        Ok(())
    }

    /// Check builder state and render it.
    fn build(&self) -> BuildResult<BuiltQuery> {
        let checked = self
            .table_name()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| BuildError::missing_table(Self::KIND.as_str()))
            .and_then(|table| self.validate().map(|()| table));

        let table = match checked {
            Ok(table) => table,
            Err(err) => {
                trace::rejected(Self::KIND, &err);
                return Err(err);
            }
        };

        let (sql, params) = self.render(table);
        trace::built(Self::KIND, &sql, params.len());
        Ok(BuiltQuery::new(sql, params))
    }

    /// Build and return the `(sql, args)` pair.
    fn to_sql(&self) -> BuildResult<(String, Vec<Value>)> {
        self.build().map(BuiltQuery::into_parts)
    }
}

/// WHERE-clause methods shared by every builder that owns a [`Predicates`].
///
/// Each `where_*` method appends one predicate. Each `where_*_if` twin appends
/// only when `check` is true and otherwise returns the builder unchanged.
pub trait Filter: Sized {
    /// Mutable access to the accumulated predicates.
    fn predicates_mut(&mut self) -> &mut Predicates;

    /// Append a predicate built with the functions in [`crate::predicate`].
    fn where_predicate(mut self, predicate: Predicate) -> Self {
        self.predicates_mut().push(predicate);
        self
    }

    /// Append a predicate if `check` is true.
    fn where_predicate_if(self, predicate: Predicate, check: bool) -> Self {
        if check { self.where_predicate(predicate) } else { self }
    }

    /// Add WHERE: field = value
    fn where_is_equal(self, field: &str, value: impl Into<Value>) -> Self {
        self.where_predicate(predicate::is_equal(field, value))
    }

    /// Add WHERE if `check`: field = value
    fn where_is_equal_if(self, field: &str, value: impl Into<Value>, check: bool) -> Self {
        if check { self.where_is_equal(field, value) } else { self }
    }

    /// Add WHERE: field != value
    fn where_is_not_equal(self, field: &str, value: impl Into<Value>) -> Self {
        self.where_predicate(predicate::is_not_equal(field, value))
    }

    /// Add WHERE if `check`: field != value
    fn where_is_not_equal_if(self, field: &str, value: impl Into<Value>, check: bool) -> Self {
        if check { self.where_is_not_equal(field, value) } else { self }
    }

    /// Add WHERE: field < value
    fn where_is_less_than(self, field: &str, value: impl Into<Value>) -> Self {
        self.where_predicate(predicate::is_less_than(field, value))
    }

    /// Add WHERE if `check`: field < value
    fn where_is_less_than_if(self, field: &str, value: impl Into<Value>, check: bool) -> Self {
        if check { self.where_is_less_than(field, value) } else { self }
    }

    /// Add WHERE: field <= value
    fn where_is_less_than_or_equal_to(self, field: &str, value: impl Into<Value>) -> Self {
        self.where_predicate(predicate::is_less_than_or_equal_to(field, value))
    }

    /// Add WHERE if `check`: field <= value
    fn where_is_less_than_or_equal_to_if(
        self,
        field: &str,
        value: impl Into<Value>,
        check: bool,
    ) -> Self {
        if check { self.where_is_less_than_or_equal_to(field, value) } else { self }
    }

    /// Add WHERE: field > value
    fn where_is_greater_than(self, field: &str, value: impl Into<Value>) -> Self {
        self.where_predicate(predicate::is_greater_than(field, value))
    }

    /// Add WHERE if `check`: field > value
    fn where_is_greater_than_if(self, field: &str, value: impl Into<Value>, check: bool) -> Self {
        if check { self.where_is_greater_than(field, value) } else { self }
    }

    /// Add WHERE: field >= value
    fn where_is_greater_than_or_equal_to(self, field: &str, value: impl Into<Value>) -> Self {
        self.where_predicate(predicate::is_greater_than_or_equal_to(field, value))
    }

    /// Add WHERE if `check`: field >= value
    fn where_is_greater_than_or_equal_to_if(
        self,
        field: &str,
        value: impl Into<Value>,
        check: bool,
    ) -> Self {
        if check { self.where_is_greater_than_or_equal_to(field, value) } else { self }
    }

    /// Add WHERE: field IS NULL
    fn where_is_null(self, field: &str) -> Self {
        self.where_predicate(predicate::is_null(field))
    }

    /// Add WHERE if `check`: field IS NULL
    fn where_is_null_if(self, field: &str, check: bool) -> Self {
        if check { self.where_is_null(field) } else { self }
    }

    /// Add WHERE: field IS NOT NULL
    fn where_is_not_null(self, field: &str) -> Self {
        self.where_predicate(predicate::is_not_null(field))
    }

    /// Add WHERE if `check`: field IS NOT NULL
    fn where_is_not_null_if(self, field: &str, check: bool) -> Self {
        if check { self.where_is_not_null(field) } else { self }
    }

    /// Add WHERE: field LIKE pattern
    fn where_is_like(self, field: &str, pattern: impl Into<Value>) -> Self {
        self.where_predicate(predicate::is_like(field, pattern))
    }

    /// Add WHERE if `check`: field LIKE pattern
    fn where_is_like_if(self, field: &str, pattern: impl Into<Value>, check: bool) -> Self {
        if check { self.where_is_like(field, pattern) } else { self }
    }

    /// Add WHERE: field IN (values...)
    ///
    /// An empty `values` renders `field IN ()`; guard against it with
    /// [`Filter::where_in_if`].
    fn where_in<I, V>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.where_predicate(predicate::is_in(field, values))
    }

    /// Add WHERE if `check`: field IN (values...)
    fn where_in_if<I, V>(self, field: &str, values: I, check: bool) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        if check { self.where_in(field, values) } else { self }
    }
}
